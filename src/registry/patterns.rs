//! Curated recognition patterns, one entry per canonical model.
//!
//! Order matters twice: it is the order matched models are reported in, and
//! the order target names are resolved by substring. Longer model ids come
//! before their shorter prefixes (`sony_a7c2` before `sony_a7c`).
//!
//! A trailing `(?!...)` before the closing `\b` excludes suffix variants of
//! the same base so `a7` never fires on `a7iii`. See [`super::Pattern`].

pub(crate) const MODEL_PATTERNS: &[(&str, &[&str])] = &[
    (
        "ricoh_gr3xhdf",
        &[
            r"\bgr3x\s*hdf\b",
            r"\bgr3xhdf\b",
            r"\bgriiix\s*hdf\b",
            r"\bgriiixhdf\b",
            r"\bgr\s*iii\s*x\s*hdf\b",
        ],
    ),
    (
        "ricoh_gr3hdf",
        &[
            r"\bgr3\s*hdf\b",
            r"\bgr3hdf\b",
            r"\bgriii\s*hdf\b",
            r"\bgriiihdf\b",
            r"\bgr\s*iii\s*hdf\b",
        ],
    ),
    (
        "ricoh_gr3x",
        &[
            r"\bgr3x(?!\s*hdf|hdf)\b",
            r"\bgriiix(?!\s*hdf|hdf)\b",
            r"\bgr\s*iii\s*x(?!\s*hdf)\b",
        ],
    ),
    (
        "ricoh_gr4",
        &[
            r"\bgr4\b",
            r"\bgriv\b",
            r"\bgr\s*iv\b",
        ],
    ),
    (
        "ricoh_gr3",
        &[
            r"\bgr3(?!x|\s*hdf|hdf)\b",
            r"\bgriii(?!x|\s*hdf|hdf)\b",
            r"\bgr\s*iii(?!\s*x|\s*hdf)\b",
        ],
    ),
    (
        "ricoh_gr2",
        &[
            r"\bgr2\b",
            r"\bgrii\b",
            r"\bgr\s*ii\b",
        ],
    ),
    (
        "sony_a7c2",
        &[
            r"\ba7c\s*ii\b",
            r"\ba7cii\b",
            r"\ba7c2\b",
            r"\balpha\s*7c\s*ii\b",
            r"\bsony\s*a7c\s*ii\b",
            r"\bsony\s*a7cii\b",
            r"\bsony\s*a7c2\b",
            r"\bilce[-\s]?7cm2\b",
        ],
    ),
    (
        "sony_a7cr",
        &[
            r"\ba7cr\b",
            r"\balpha\s*7cr\b",
            r"\bilce[-\s]?7cr\b",
        ],
    ),
    (
        "sony_a1ii",
        &[
            r"\ba1\s*ii\b",
            r"\ba1ii\b",
            r"\ba1m2\b",
            r"\balpha\s*1\s*ii\b",
            r"\bilce[-\s]?1m2\b",
        ],
    ),
    (
        "sony_a1",
        &[
            r"\bsony\s*a1(?!\s*(ii|2|m2)|ii|2|m2)\b",
            r"\balpha\s*1(?!\s*(ii|2)|ii|2)\b",
            r"\bilce[-\s]?1\b",
        ],
    ),
    (
        "sony_a9iii",
        &[
            r"\ba9\s*iii\b",
            r"\ba9iii\b",
            r"\ba93\b",
            r"\balpha\s*9\s*iii\b",
            r"\bilce[-\s]?9m3\b",
        ],
    ),
    (
        "sony_a9ii",
        &[
            r"\ba9\s*ii\b",
            r"\ba9ii\b",
            r"\ba92\b",
            r"\balpha\s*9\s*ii\b",
            r"\bilce[-\s]?9m2\b",
        ],
    ),
    (
        "sony_a9",
        &[
            r"\ba9(?!\s*(ii|iii|2|3)|ii|iii|2|3)\b",
            r"\balpha\s*9(?!\s*(ii|iii|2|3)|ii|iii|2|3)\b",
            r"\bsony\s*a9(?!\s*(ii|iii|2|3)|ii|iii|2|3)\b",
            r"\bilce[-\s]?9\b",
        ],
    ),
    (
        "sony_a7c",
        &[
            r"\ba7c(?!\s*(ii|2|r)|ii|2|r)\b",
            r"\balpha\s*7c(?!\s*(ii|2|r))\b",
            r"\bsony\s*a7c(?!\s*(ii|2|r))\b",
            r"\bilce[-\s]?7c\b",
        ],
    ),
    (
        "sony_a7ii",
        &[
            r"\ba7\s*ii\b",
            r"\ba7ii\b",
        ],
    ),
    (
        "sony_a7iii",
        &[
            r"\ba7\s*iii\b",
            r"\ba7iii\b",
        ],
    ),
    (
        "sony_a7iv",
        &[
            r"\ba7\s*iv\b",
            r"\ba7iv\b",
        ],
    ),
    (
        "sony_a7r",
        &[
            r"\ba7r(?!\s*(ii|iii|iv|v|2|3|4)|ii|iii|iv|v|2|3|4)\b",
            r"\balpha\s*7r(?!\s*(ii|iii|iv|v|2|3|4)|ii|iii|iv|v|2|3|4)\b",
            r"\bsony\s*a7r(?!\s*(ii|iii|iv|v|2|3|4)|ii|iii|iv|v|2|3|4)\b",
            r"\ba7r\s*[56]\b",
            r"\ba7r[56]\b",
        ],
    ),
    (
        "sony_a7rii",
        &[
            r"\ba7r\s*ii\b",
            r"\ba7rii\b",
            r"\ba7r2\b",
        ],
    ),
    (
        "sony_a7riii",
        &[
            r"\ba7r\s*iii\b",
            r"\ba7riii\b",
            r"\ba7r3\b",
        ],
    ),
    (
        "sony_a7riv",
        &[
            r"\ba7r\s*iv\b",
            r"\ba7riv\b",
            r"\ba7r4\b",
        ],
    ),
    (
        "sony_a7rv",
        &[
            r"\ba7r\s*v\b",
            r"\ba7rv\b",
        ],
    ),
    (
        "sony_a7sii",
        &[
            r"\ba7s\s*ii\b",
            r"\ba7sii\b",
            r"\ba7s2\b",
        ],
    ),
    (
        "sony_a7siii",
        &[
            r"\ba7s\s*iii\b",
            r"\ba7siii\b",
            r"\ba7s3\b",
        ],
    ),
    ("sony_a7s", &[r"\ba7s\b"]),
    (
        "sony_a7",
        &[
            r"\ba7(?!\s*(ii|iii|iv|v|2|3|4|5|c|cr|r|s)|ii|iii|iv|v|2|3|4|5|c|cr|r|s)\b",
            r"\balpha\s*7(?!\s*(ii|iii|iv|v|2|3|4|5|c|cr|r|s)|ii|iii|iv|v|2|3|4|5|c|cr|r|s)\b",
            r"\bsony\s*a7(?!\s*(ii|iii|iv|v|2|3|4|5|c|cr|r|s)|ii|iii|iv|v|2|3|4|5|c|cr|r|s)\b",
        ],
    ),
    (
        "sony_rx100vii",
        &[
            r"\brx100\s*vii\b",
            r"\brx100vii\b",
            r"\brx100m7\b",
            r"\brx100\s*mark\s*vii\b",
            r"\brx1007\b",
        ],
    ),
    (
        "sony_rx100vi",
        &[
            r"\brx100\s*vi\b",
            r"\brx100vi\b",
            r"\brx100m6\b",
            r"\brx100\s*mark\s*vi\b",
            r"\brx1006\b",
        ],
    ),
    (
        "sony_rx100va",
        &[
            r"\brx100\s*va\b",
            r"\brx100va\b",
            r"\brx100m5a\b",
        ],
    ),
    (
        "sony_rx100v",
        &[
            r"\brx100\s*v(?!a)\b",
            r"\brx100v(?!a)\b",
            r"\brx100m5(?!a)\b",
            r"\brx1005\b",
        ],
    ),
    (
        "sony_rx100iv",
        &[
            r"\brx100\s*iv\b",
            r"\brx100iv\b",
            r"\brx100m4\b",
            r"\brx100\s*mark\s*iv\b",
            r"\brx1004\b",
        ],
    ),
    (
        "sony_rx100iii",
        &[
            r"\brx100\s*iii\b",
            r"\brx100iii\b",
            r"\brx100m3\b",
            r"\brx100\s*mark\s*iii\b",
            r"\brx1003\b",
        ],
    ),
    (
        "sony_rx100ii",
        &[
            r"\brx100\s*ii\b",
            r"\brx100ii\b",
            r"\brx100m2\b",
            r"\brx100\s*mark\s*ii\b",
            r"\brx1002\b",
        ],
    ),
    ("sony_rx100", &[r"\brx100(?!\s*(ii|iii|iv|v|vi|vii|2|3|4|5|6|7|m2|m3|m4|m5|m5a|m6|m7)|ii|iii|iv|v|vi|vii|2|3|4|5|6|7|m2|m3|m4|m5|m5a|m6|m7)\b"]),
    (
        "sony_rx10iv",
        &[
            r"\brx10\s*iv\b",
            r"\brx10iv\b",
            r"\brx10m4\b",
            r"\brx104\b",
        ],
    ),
    (
        "sony_rx10iii",
        &[
            r"\brx10\s*iii\b",
            r"\brx10iii\b",
            r"\brx10m3\b",
            r"\brx103\b",
        ],
    ),
    (
        "sony_rx10ii",
        &[
            r"\brx10\s*ii\b",
            r"\brx10ii\b",
            r"\brx10m2\b",
            r"\brx102\b",
        ],
    ),
    ("sony_rx10", &[r"\brx10(?!\s*(ii|iii|iv|2|3|4|m2|m3|m4)|ii|iii|iv|2|3|4|m2|m3|m4)\b"]),
    (
        "sony_rx1r2",
        &[
            r"\brx1r\s*ii\b",
            r"\brx1rii\b",
            r"\brx1r2\b",
            r"\brx1r\s*mark\s*ii\b",
        ],
    ),
    ("sony_rx1r", &[r"\brx1r(?!\s*(ii|2|mark\s*ii)|ii|2)\b"]),
    ("sony_rx1", &[r"\brx1(?!r)\b"]),
    ("sony_fx30", &[r"\bfx30\b"]),
    ("sony_fx3", &[r"\bfx3\b"]),
    ("sony_fx6", &[r"\bfx6\b"]),
    ("sony_fx9", &[r"\bfx9\b"]),
    (
        "sony_zve1",
        &[
            r"\bzv[-\s]?e1\b",
            r"\bzve1\b",
        ],
    ),
    (
        "sony_zve10ii",
        &[
            r"\bzv[-\s]?e10\s*ii\b",
            r"\bzve10ii\b",
            r"\bzv[-\s]?e10m2\b",
        ],
    ),
    (
        "sony_zv1",
        &[
            r"\bzv[-\s]?1\b",
            r"\bzv1\b",
        ],
    ),
    (
        "sony_zv1ii",
        &[
            r"\bzv[-\s]?1\s*ii\b",
            r"\bzv1ii\b",
            r"\bzv[-\s]?1m2\b",
        ],
    ),
    (
        "sony_zv1f",
        &[
            r"\bzv[-\s]?1f\b",
            r"\bzv1f\b",
        ],
    ),
    (
        "sony_zve10",
        &[
            r"\bzv[-\s]?e10\b",
            r"\bzve10\b",
        ],
    ),
    (
        "sony_a5000",
        &[
            r"\ba5000\b",
            r"\ba\s*5000\b",
            r"\balpha\s*5000\b",
        ],
    ),
    (
        "sony_a5100",
        &[
            r"\ba5100\b",
            r"\ba\s*5100\b",
            r"\balpha\s*5100\b",
        ],
    ),
    (
        "sony_a6000",
        &[
            r"\ba6000\b",
            r"\ba\s*6000\b",
            r"\balpha\s*6000\b",
        ],
    ),
    (
        "sony_a6100",
        &[
            r"\ba6100\b",
            r"\ba\s*6100\b",
            r"\balpha\s*6100\b",
        ],
    ),
    (
        "sony_a6300",
        &[
            r"\ba6300\b",
            r"\ba\s*6300\b",
            r"\balpha\s*6300\b",
        ],
    ),
    (
        "sony_a6700",
        &[
            r"\ba6700\b",
            r"\ba\s*6700\b",
        ],
    ),
    (
        "sony_a6400",
        &[
            r"\ba6400\b",
            r"\ba\s*6400\b",
        ],
    ),
    (
        "sony_a6500",
        &[
            r"\ba6500\b",
            r"\ba\s*6500\b",
            r"\balpha\s*6500\b",
        ],
    ),
    (
        "sony_a6600",
        &[
            r"\ba6600\b",
            r"\ba\s*6600\b",
            r"\balpha\s*6600\b",
        ],
    ),
    (
        "olympus_om1",
        &[
            r"\bom[-\s]?1\b",
            r"\bolympus\s*om[-\s]?1\b",
        ],
    ),
    (
        "olympus_om2",
        &[
            r"\bom[-\s]?2\b",
            r"\bolympus\s*om[-\s]?2\b",
        ],
    ),
];
