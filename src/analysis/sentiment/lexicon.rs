//! Embedded sentiment lexicon: word -> (polarity, subjectivity).
//! Polarity runs -1..1, subjectivity 0..1. Entries lean toward the
//! emotional vocabulary of song lyrics and everyday prose.

pub(super) const LEXICON: &[(&str, f32, f32)] = &[
    // Strongly positive
    ("wonderful", 1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("awesome", 1.0, 1.0),
    ("magical", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("brilliant", 0.9, 0.9),
    ("amazing", 0.9, 0.9),
    ("beautiful", 0.85, 1.0),
    ("gorgeous", 0.85, 1.0),
    ("fantastic", 0.85, 0.9),
    ("incredible", 0.8, 0.9),
    ("happy", 0.8, 1.0),
    ("joy", 0.8, 0.8),
    ("joyful", 0.8, 0.9),
    ("great", 0.8, 0.75),
    ("excellent", 0.8, 0.8),
    ("delight", 0.75, 0.85),
    ("bliss", 0.75, 0.9),
    ("shine", 0.7, 0.7),
    ("bright", 0.7, 0.8),
    ("good", 0.7, 0.6),
    ("lovely", 0.7, 0.95),
    ("glad", 0.65, 0.9),
    ("love", 0.6, 0.9),
    ("loved", 0.6, 0.9),
    ("loving", 0.6, 0.9),
    ("adore", 0.6, 0.9),
    ("sweet", 0.55, 0.65),
    ("smile", 0.55, 0.7),
    ("laugh", 0.5, 0.6),
    ("nice", 0.5, 0.8),
    ("warm", 0.5, 0.6),
    ("hope", 0.45, 0.7),
    ("hopeful", 0.5, 0.8),
    ("dream", 0.4, 0.6),
    ("win", 0.4, 0.5),
    ("peace", 0.4, 0.5),
    ("peaceful", 0.45, 0.7),
    ("free", 0.4, 0.7),
    ("gold", 0.35, 0.4),
    ("golden", 0.4, 0.5),
    ("better", 0.35, 0.5),
    ("forever", 0.3, 0.5),
    ("dance", 0.3, 0.5),
    ("home", 0.25, 0.4),
    ("young", 0.2, 0.4),
    ("fine", 0.2, 0.5),
    // Strongly negative
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 0.3),
    ("disgusting", -0.9, 0.95),
    ("devastating", -0.9, 0.9),
    ("angry", -0.8, 0.9),
    ("furious", -0.85, 0.95),
    ("cruel", -0.8, 0.8),
    ("miserable", -0.8, 0.95),
    ("heartbroken", -0.8, 1.0),
    ("bad", -0.7, 0.65),
    ("pain", -0.7, 0.8),
    ("painful", -0.7, 0.85),
    ("hurt", -0.65, 0.8),
    ("hate", -0.6, 0.9),
    ("hated", -0.6, 0.9),
    ("hating", -0.6, 0.9),
    ("fear", -0.6, 0.8),
    ("afraid", -0.6, 0.85),
    ("lonely", -0.6, 0.9),
    ("alone", -0.4, 0.6),
    ("dead", -0.6, 0.7),
    ("die", -0.6, 0.7),
    ("cry", -0.55, 0.8),
    ("crying", -0.55, 0.8),
    ("tears", -0.5, 0.7),
    ("sad", -0.5, 1.0),
    ("sorrow", -0.55, 0.85),
    ("sorry", -0.45, 0.8),
    ("wrong", -0.5, 0.5),
    ("lies", -0.5, 0.6),
    ("liar", -0.6, 0.8),
    ("broken", -0.4, 0.7),
    ("break", -0.3, 0.4),
    ("lost", -0.4, 0.5),
    ("lose", -0.4, 0.5),
    ("worse", -0.4, 0.6),
    ("cold", -0.3, 0.6),
    ("dark", -0.15, 0.4),
    ("goodbye", -0.3, 0.6),
    ("empty", -0.35, 0.6),
    ("trouble", -0.4, 0.5),
    ("storm", -0.25, 0.4),
    // Subjective but near-neutral
    ("feel", 0.0, 0.7),
    ("feeling", 0.0, 0.75),
    ("think", 0.0, 0.6),
    ("believe", 0.1, 0.7),
    ("maybe", 0.0, 0.7),
    ("seems", 0.0, 0.6),
    ("wish", 0.1, 0.7),
    ("remember", 0.0, 0.5),
    ("crazy", -0.1, 0.9),
    ("wild", 0.1, 0.7),
    ("strange", -0.05, 0.8),
];
