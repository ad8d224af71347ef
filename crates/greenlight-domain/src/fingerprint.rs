use crate::model::{DietaryProfile, Religious};
use crate::policy::SafetyLimits;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a merged profile.
///
/// Identity fields:
/// - allergens, dietary and religious restrictions (sorted, `none` excluded)
/// - effective sodium and sugar limits
///
/// Profiles that classify every item identically share a fingerprint, so
/// callers may memoize verdicts on `(item.id, fingerprint)`.
pub fn profile_fingerprint(profile: &DietaryProfile, limits: &SafetyLimits) -> String {
    let allergens = encode_set(profile.allergens.iter().map(|a| a.as_str()));
    let dietary = encode_set(profile.dietary.iter().map(|d| d.as_str()));
    let religious = encode_set(
        profile
            .religious
            .iter()
            .filter(|r| **r != Religious::None)
            .map(|r| r.as_str()),
    );

    let canonical = format!(
        "allergens={allergens}|dietary={dietary}|religious={religious}|sodium={}|sugar={}",
        profile.effective_max_sodium_mg(limits),
        profile.effective_max_sugar_g(limits),
    );

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

/// Each element is length-prefixed (`{bytes}:{text}`); custom text may contain `,` or `|`.
fn encode_set<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|v| format!("{}:{}", v.len(), v))
        .collect::<Vec<_>>()
        .join(",")
}
