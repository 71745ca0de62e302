use std::time::Duration;

/// TTL values (seconds) accepted by ClouDNS, largest first.
pub const AVAILABLE_TTL: [u32; 13] = [
    2_764_800, 1_209_600, 604_800, 86_400, 43_200, 21_600, 14_400, 7_200, 3_600, 1_800, 900, 300,
    60,
];

/// Rounds `ttl` down to the nearest supported ClouDNS TTL tier.
///
/// Anything below the smallest tier yields 60.
///
/// ```rust
/// use std::time::Duration;
/// use cloudns_provider::select_ttl;
///
/// assert_eq!(select_ttl(Duration::from_secs(5000)), 3600);
/// assert_eq!(select_ttl(Duration::from_secs(10)), 60);
/// ```
pub fn select_ttl(ttl: Duration) -> u32 {
    let secs = ttl.as_secs();
    AVAILABLE_TTL
        .iter()
        .copied()
        .find(|&tier| secs >= u64::from(tier))
        .unwrap_or(60)
}
