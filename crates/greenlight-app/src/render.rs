//! Render use case: Markdown from an in-memory report of either kind.

use crate::report::{to_renderable, to_renderable_group, ReportVariant};

pub fn render_markdown(report: &ReportVariant) -> String {
    match report {
        ReportVariant::Menu(r) => greenlight_render::render_markdown(&to_renderable(r)),
        ReportVariant::Group(r) => greenlight_render::render_group_markdown(&to_renderable_group(r)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::runtime_error_report;
    use crate::{run_group, GroupInput};

    #[test]
    fn render_markdown_for_error_report() {
        let markdown = render_markdown(&runtime_error_report("boom"));
        assert!(markdown.starts_with("# GreenLight report"));
        assert!(markdown.contains("> Error: boom"));
    }

    #[test]
    fn render_markdown_for_group_report() {
        let output = run_group(GroupInput {
            catalog_text: r#"{ "restaurants": [ { "id": "r", "name": "Diner", "menu": [ { "id": "i", "name": "Soup" } ] } ] }"#,
            config_text: "",
            overrides: Default::default(),
            matching: Default::default(),
        })
        .expect("run_group");
        let markdown = render_markdown(&ReportVariant::Group(output.report));
        assert!(markdown.starts_with("# GreenLight group picks"));
        assert!(markdown.contains("1. **Diner**: 1 of 1 items safe for everyone"));
    }
}
