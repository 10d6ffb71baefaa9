//! Alias tables for free-text target names and fallback token extraction.

/// Normalised item name (lowercase, `_`-separated) to canonical model.
pub(crate) const TARGET_MODEL_ALIASES: &[(&str, &str)] = &[
    ("gr2", "ricoh_gr2"),
    ("grii", "ricoh_gr2"),
    ("ricoh_gr2", "ricoh_gr2"),
    ("gr3", "ricoh_gr3"),
    ("griii", "ricoh_gr3"),
    ("ricoh_gr3", "ricoh_gr3"),
    ("gr3x", "ricoh_gr3x"),
    ("griiix", "ricoh_gr3x"),
    ("ricoh_gr3x", "ricoh_gr3x"),
    ("gr3_hdf", "ricoh_gr3hdf"),
    ("gr3hdf", "ricoh_gr3hdf"),
    ("griii_hdf", "ricoh_gr3hdf"),
    ("griiihdf", "ricoh_gr3hdf"),
    ("ricoh_gr3_hdf", "ricoh_gr3hdf"),
    ("ricoh_gr3hdf", "ricoh_gr3hdf"),
    ("gr3x_hdf", "ricoh_gr3xhdf"),
    ("gr3xhdf", "ricoh_gr3xhdf"),
    ("griiix_hdf", "ricoh_gr3xhdf"),
    ("griiixhdf", "ricoh_gr3xhdf"),
    ("ricoh_gr3x_hdf", "ricoh_gr3xhdf"),
    ("ricoh_gr3xhdf", "ricoh_gr3xhdf"),
    ("gr4", "ricoh_gr4"),
    ("griv", "ricoh_gr4"),
    ("ricoh_gr4", "ricoh_gr4"),
    ("a1", "sony_a1"),
    ("sony_a1", "sony_a1"),
    ("a1ii", "sony_a1ii"),
    ("sony_a1ii", "sony_a1ii"),
    ("a9", "sony_a9"),
    ("sony_a9", "sony_a9"),
    ("a9ii", "sony_a9ii"),
    ("sony_a9ii", "sony_a9ii"),
    ("a9iii", "sony_a9iii"),
    ("sony_a9iii", "sony_a9iii"),
    ("a7c2", "sony_a7c2"),
    ("a7cii", "sony_a7c2"),
    ("sony_a7c2", "sony_a7c2"),
    ("sony_a7cii", "sony_a7c2"),
    ("sony_alpha_7c_ii", "sony_a7c2"),
    ("sony_alpha_7c2", "sony_a7c2"),
    ("a7c", "sony_a7c"),
    ("sony_a7c", "sony_a7c"),
    ("a7", "sony_a7"),
    ("sony_a7", "sony_a7"),
    ("a7r", "sony_a7r"),
    ("sony_a7r", "sony_a7r"),
    ("a5000", "sony_a5000"),
    ("sony_a5000", "sony_a5000"),
    ("a5100", "sony_a5100"),
    ("sony_a5100", "sony_a5100"),
    ("a6000", "sony_a6000"),
    ("sony_a6000", "sony_a6000"),
    ("a6100", "sony_a6100"),
    ("sony_a6100", "sony_a6100"),
    ("a6300", "sony_a6300"),
    ("sony_a6300", "sony_a6300"),
    ("a6400", "sony_a6400"),
    ("sony_a6400", "sony_a6400"),
    ("a6500", "sony_a6500"),
    ("sony_a6500", "sony_a6500"),
    ("a6600", "sony_a6600"),
    ("sony_a6600", "sony_a6600"),
    ("a6700", "sony_a6700"),
    ("sony_a6700", "sony_a6700"),
    ("fx3", "sony_fx3"),
    ("sony_fx3", "sony_fx3"),
    ("fx30", "sony_fx30"),
    ("sony_fx30", "sony_fx30"),
    ("fx6", "sony_fx6"),
    ("sony_fx6", "sony_fx6"),
    ("fx9", "sony_fx9"),
    ("sony_fx9", "sony_fx9"),
    ("rx100", "sony_rx100"),
    ("sony_rx100", "sony_rx100"),
    ("rx100ii", "sony_rx100ii"),
    ("sony_rx100ii", "sony_rx100ii"),
    ("rx100iii", "sony_rx100iii"),
    ("sony_rx100iii", "sony_rx100iii"),
    ("rx100iv", "sony_rx100iv"),
    ("sony_rx100iv", "sony_rx100iv"),
    ("rx100v", "sony_rx100v"),
    ("sony_rx100v", "sony_rx100v"),
    ("rx100va", "sony_rx100va"),
    ("sony_rx100va", "sony_rx100va"),
    ("rx100vi", "sony_rx100vi"),
    ("sony_rx100vi", "sony_rx100vi"),
    ("rx100vii", "sony_rx100vii"),
    ("sony_rx100vii", "sony_rx100vii"),
    ("rx10", "sony_rx10"),
    ("sony_rx10", "sony_rx10"),
    ("rx10ii", "sony_rx10ii"),
    ("sony_rx10ii", "sony_rx10ii"),
    ("rx10iii", "sony_rx10iii"),
    ("sony_rx10iii", "sony_rx10iii"),
    ("rx10iv", "sony_rx10iv"),
    ("sony_rx10iv", "sony_rx10iv"),
    ("rx1", "sony_rx1"),
    ("sony_rx1", "sony_rx1"),
    ("sony_a7sii", "sony_a7sii"),
    ("sony_a7riii", "sony_a7riii"),
    ("sony_a7rii", "sony_a7rii"),
    ("sony_a7r2", "sony_a7rii"),
    ("sony_a7r3", "sony_a7riii"),
    ("sony_a7r5", "sony_a7r"),
    ("sony_a7r6", "sony_a7r"),
    ("sony_rx1r", "sony_rx1r"),
    ("sony_rx1r2", "sony_rx1r2"),
    ("zve1", "sony_zve1"),
    ("sony_zve1", "sony_zve1"),
    ("zve10ii", "sony_zve10ii"),
    ("sony_zve10ii", "sony_zve10ii"),
    ("zv1ii", "sony_zv1ii"),
    ("sony_zv1ii", "sony_zv1ii"),
    ("zv1f", "sony_zv1f"),
    ("sony_zv1f", "sony_zv1f"),
    ("sony_zv1", "sony_zv1"),
    ("sony_zve10", "sony_zve10"),
    ("olympus_film", "olympus_film"),
    ("olympus", "olympus_unknown"),
];

/// Normalised Alpha-style token (`a7iii`, `a73`, `a1ii`) to canonical model.
pub(crate) const SONY_TOKEN_ALIASES: &[(&str, &str)] = &[
    ("a1", "sony_a1"),
    ("a1ii", "sony_a1ii"),
    ("a12", "sony_a1ii"),
    ("a1m2", "sony_a1ii"),
    ("a9", "sony_a9"),
    ("a9ii", "sony_a9ii"),
    ("a92", "sony_a9ii"),
    ("a9iii", "sony_a9iii"),
    ("a93", "sony_a9iii"),
    ("a7sii", "sony_a7sii"),
    ("a7s2", "sony_a7sii"),
    ("a7siii", "sony_a7siii"),
    ("a7s3", "sony_a7siii"),
    ("a7", "sony_a7"),
    ("a7r", "sony_a7r"),
    ("a7riii", "sony_a7riii"),
    ("a7r3", "sony_a7riii"),
    ("a7rii", "sony_a7rii"),
    ("a7r2", "sony_a7rii"),
    ("a7riv", "sony_a7riv"),
    ("a7r4", "sony_a7riv"),
    ("a7rv", "sony_a7rv"),
    // numeric typos like a7r5/a7r6 land on the a7r family
    ("a7r5", "sony_a7r"),
    ("a7r6", "sony_a7r"),
    ("a7iv", "sony_a7iv"),
    ("a74", "sony_a7iv"),
    ("a7iii", "sony_a7iii"),
    ("a73", "sony_a7iii"),
    ("a7ii", "sony_a7ii"),
    ("a72", "sony_a7ii"),
    ("a7c", "sony_a7c"),
    ("a7c2", "sony_a7c2"),
    ("a7cii", "sony_a7c2"),
    ("a7cr", "sony_a7cr"),
    ("a5000", "sony_a5000"),
    ("a5100", "sony_a5100"),
    ("a6000", "sony_a6000"),
    ("a6100", "sony_a6100"),
    ("a6300", "sony_a6300"),
    ("a6400", "sony_a6400"),
    ("a6500", "sony_a6500"),
    ("a6600", "sony_a6600"),
    ("a6700", "sony_a6700"),
    ("zve1", "sony_zve1"),
    ("zve10", "sony_zve10"),
    ("zve10ii", "sony_zve10ii"),
    ("zv1", "sony_zv1"),
    ("zv1ii", "sony_zv1ii"),
    ("zv1f", "sony_zv1f"),
    ("fx3", "sony_fx3"),
    ("fx30", "sony_fx30"),
    ("fx6", "sony_fx6"),
    ("fx9", "sony_fx9"),
];

/// Normalised RX-series token (`rx100m7`, `rx1rii`) to canonical model.
pub(crate) const RX_TOKEN_ALIASES: &[(&str, &str)] = &[
    ("rx1", "sony_rx1"),
    ("rx1r", "sony_rx1r"),
    ("rx1rii", "sony_rx1r2"),
    ("rx1r2", "sony_rx1r2"),
    ("rx1rm2", "sony_rx1r2"),
    ("rx100", "sony_rx100"),
    ("rx100ii", "sony_rx100ii"),
    ("rx1002", "sony_rx100ii"),
    ("rx100m2", "sony_rx100ii"),
    ("rx100iii", "sony_rx100iii"),
    ("rx1003", "sony_rx100iii"),
    ("rx100m3", "sony_rx100iii"),
    ("rx100iv", "sony_rx100iv"),
    ("rx1004", "sony_rx100iv"),
    ("rx100m4", "sony_rx100iv"),
    ("rx100v", "sony_rx100v"),
    ("rx1005", "sony_rx100v"),
    ("rx100m5", "sony_rx100v"),
    ("rx100va", "sony_rx100va"),
    ("rx100m5a", "sony_rx100va"),
    ("rx100vi", "sony_rx100vi"),
    ("rx1006", "sony_rx100vi"),
    ("rx100m6", "sony_rx100vi"),
    ("rx100vii", "sony_rx100vii"),
    ("rx1007", "sony_rx100vii"),
    ("rx100m7", "sony_rx100vii"),
    ("rx10", "sony_rx10"),
    ("rx10ii", "sony_rx10ii"),
    ("rx102", "sony_rx10ii"),
    ("rx10m2", "sony_rx10ii"),
    ("rx10iii", "sony_rx10iii"),
    ("rx103", "sony_rx10iii"),
    ("rx10m3", "sony_rx10iii"),
    ("rx10iv", "sony_rx10iv"),
    ("rx104", "sony_rx10iv"),
    ("rx10m4", "sony_rx10iv"),
];

/// Generic model to the specific descendants that suppress it.
///
/// Checked in this order against the matched set, so a family that is itself
/// a descendant (`sony_a7c`) is still present when its parent is checked.
pub(crate) const GENERIC_MODEL_OVERRIDES: &[(&str, &[&str])] = &[
    ("sony_a1", &["sony_a1ii"]),
    ("sony_a9", &["sony_a9ii", "sony_a9iii"]),
    (
        "sony_a7",
        &[
            "sony_a7ii",
            "sony_a7iii",
            "sony_a7iv",
            "sony_a7c",
            "sony_a7c2",
            "sony_a7cr",
            "sony_a7r",
            "sony_a7rii",
            "sony_a7riii",
            "sony_a7riv",
            "sony_a7rv",
            "sony_a7s",
            "sony_a7sii",
            "sony_a7siii",
        ],
    ),
    ("sony_a7c", &["sony_a7c2", "sony_a7cr"]),
    ("sony_a7r", &["sony_a7rii", "sony_a7riii", "sony_a7riv", "sony_a7rv"]),
    ("sony_a7s", &["sony_a7sii", "sony_a7siii"]),
    ("sony_rx1", &["sony_rx1r", "sony_rx1r2"]),
    (
        "sony_rx100",
        &[
            "sony_rx100ii",
            "sony_rx100iii",
            "sony_rx100iv",
            "sony_rx100v",
            "sony_rx100va",
            "sony_rx100vi",
            "sony_rx100vii",
        ],
    ),
    ("sony_rx10", &["sony_rx10ii", "sony_rx10iii", "sony_rx10iv"]),
    ("sony_zv1", &["sony_zv1ii", "sony_zv1f"]),
    ("sony_zve10", &["sony_zve10ii"]),
];
