use crate::{
    RenderableGroupReport, RenderableLevel, RenderableReasonKind, RenderableReport,
    RenderableRestaurant,
};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# GreenLight report\n\n");

    let p = &report.profile;
    let restrictions = if p.restrictions.is_empty() {
        "none".to_string()
    } else {
        p.restrictions.join(", ")
    };
    out.push_str(&format!(
        "- Diners: {}\n- Restrictions: {}\n- Limits: sodium {}mg, sugar {}g\n",
        p.members, restrictions, p.max_sodium_mg, p.max_sugar_g
    ));

    if let Some(err) = &report.error {
        out.push_str(&format!("\n> Error: {}\n", err));
        return out;
    }

    let s = &report.summary;
    out.push_str(&format!(
        "- Restaurants: {} scanned ({} safe / {} caution / {} unsafe)\n- Items: {} scanned\n\n",
        s.restaurants_scanned,
        s.restaurants_safe,
        s.restaurants_caution,
        s.restaurants_unsafe,
        s.items_scanned
    ));

    if s.restaurants_filtered > 0 {
        out.push_str(&format!(
            "> Note: {} restaurant(s) hidden by the level filter.\n\n",
            s.restaurants_filtered
        ));
    }

    if report.restaurants.is_empty() {
        out.push_str("No restaurants to show.\n");
        return out;
    }

    for r in &report.restaurants {
        render_restaurant(&mut out, r);
    }

    out
}

fn render_restaurant(out: &mut String, r: &RenderableRestaurant) {
    out.push_str(&format!("## {}\n\n", r.name));

    let restaurant_badge = badge(r.level, Some(r.safe_percent));
    match &r.cuisine {
        Some(cuisine) => out.push_str(&format!(
            "**{}** · {} · {} of {} items safe\n\n",
            restaurant_badge, cuisine, r.safe_count, r.total
        )),
        None => out.push_str(&format!(
            "**{}** · {} of {} items safe\n\n",
            restaurant_badge, r.safe_count, r.total
        )),
    }

    if r.items.is_empty() {
        out.push_str("No menu items.\n\n");
        return;
    }

    for item in &r.items {
        out.push_str(&format!(
            "- {} **{}** ({})\n",
            level_marker(item.level),
            item.name,
            badge(item.level, None)
        ));
        for reason in &item.reasons {
            let marker = match reason.kind {
                RenderableReasonKind::Violation => "❌",
                RenderableReasonKind::Warning => "⚠️",
                RenderableReasonKind::Confirmation => "✅",
            };
            out.push_str(&format!("  - {} {}\n", marker, reason.message));
        }
    }
    out.push('\n');
}

pub fn render_group_markdown(report: &RenderableGroupReport) -> String {
    let mut out = String::new();

    out.push_str("# GreenLight group picks\n\n");
    let restrictions = if report.restrictions.is_empty() {
        "none".to_string()
    } else {
        report.restrictions.join(", ")
    };
    out.push_str(&format!(
        "- Restrictions: {}\n- Restaurants: {} scanned, {} with safe options\n\n",
        restrictions,
        report.restaurants_scanned,
        report.matches.len()
    ));
    if report.loose {
        out.push_str(
            "> Note: loose tag matching; a label such as `Dairy-Free` counts against `dairy`.\n\n",
        );
    }

    if report.matches.is_empty() {
        out.push_str("No restaurant has an item safe for the whole group.\n");
        return out;
    }

    for (idx, m) in report.matches.iter().enumerate() {
        let name = match &m.cuisine {
            Some(cuisine) => format!("{} ({})", m.name, cuisine),
            None => m.name.clone(),
        };
        out.push_str(&format!(
            "{}. **{}**: {} of {} items safe for everyone\n",
            idx + 1,
            name,
            m.safe_count,
            m.total
        ));
        if !m.safe_items.is_empty() {
            out.push_str(&format!("   - items: `{}`\n", m.safe_items.join("`, `")));
        }
    }

    out
}

/// Badge label as shown on restaurant cards, e.g. `Safe (60%)`.
fn badge(level: RenderableLevel, percent: Option<u8>) -> String {
    let label = match level {
        RenderableLevel::Safe => "Safe",
        RenderableLevel::Caution => "Caution",
        RenderableLevel::Unsafe => "Unsafe",
    };
    match percent {
        Some(p) => format!("{} ({}%)", label, p),
        None => label.to_string(),
    }
}

fn level_marker(level: RenderableLevel) -> &'static str {
    match level {
        RenderableLevel::Safe => "🟢",
        RenderableLevel::Caution => "🟡",
        RenderableLevel::Unsafe => "🔴",
    }
}
