// Built-in controlled vocabularies.
//
// Raw tables as maintained by the HLT programme. Some entries carry historical
// misspellings; `normalize` corrects them when the hierarchy is built, so the
// tables can be pasted in from the source sheet unchanged.

/// A raw hierarchy: broad category -> specific keyword synonyms, in display order.
pub type RawHierarchy = &'static [(&'static str, &'static [&'static str])];

pub const METHODS: RawHierarchy = &[
    (
        "mixed",
        &["Mixed-methods", "theoretical analysis", "conceptual analysis"],
    ),
    (
        "Quan",
        &[
            "surveys",
            "questionnaires",
            "Advanced stats",
            "observational studies",
            "correlational data",
            "quantitative analysis",
            "longitudinal data",
            "dyadic analyses",
            "multilevel studies",
            "scale development",
            "confirmatory factor analysis",
            "Intervention trials",
            "Big Data",
        ],
    ),
    (
        "Qualitative",
        &[
            "focus groups",
            "talanoa",
            "qualitative analyses",
            "thematic analysis",
            "open-ended questions",
            "content analysis",
            "interviews",
            "clinical interviews",
        ],
    ),
    (
        "Lab experiments (instruments)",
        &[
            "Experiments",
            "eye tracking",
            "VR",
            "TMS",
            "EEG / ERP",
            "Physiological measures",
            "psychophysiological measures",
            "Animal Research",
        ],
    ),
    (
        "Behavioural experiments (no instruments)",
        &[
            "behavioural experiments",
            "behavioural observations",
            "Computerized cognitive tasks",
            "social interaction tasks",
            "human-AI interaction",
            "Non-neuroscientific equipment",
        ],
    ),
];

pub const TOPICS: RawHierarchy = &[
    ("Education", &["Social learning"]),
    (
        "Cognition",
        &[
            "Social cognition",
            "Mind perception",
            "Person perception",
            "Theory of mind",
            "Psychopathy",
            "Attention",
            "executive function",
            "Human AI interaction",
            "Automatic Processes",
            "Controlled Processes",
            "Causal",
            "Psychadelic",
            "Animal Behaviour",
            "Neuro plasticity",
            "Trauma",
        ],
    ),
    (
        "Developmental",
        &[
            "Child Development",
            "Youth",
            "Youth Offending",
            "Brain development",
            "Animal Behaviour",
        ],
    ),
    ("Cultural", &["Pacific", "culture"]),
    (
        "Psychopathology/MH",
        &[
            "Psychopathy",
            "self injury",
            "suicide",
            "psychosis",
            "postpartum",
            "early intervention",
            "mental health",
            "Psychopharmacology",
            "Drugs",
            "Trauma",
        ],
    ),
    ("Stereotypes", &["prejudice", "discrimination"]),
    ("Perception", &[]),
    (
        "Memory",
        &[
            "Autobiographical memory",
            "Human Memory",
            "Episodic memory",
            "Priming memory",
            "Implicit memory",
            "Recognition Memory",
            "Memory Face",
            "Location memory",
            "Time based memory",
            "Neuro plasticity",
        ],
    ),
    (
        "Emotion",
        &[
            "Emotion regulation",
            "Emotion socialization",
            "Emotion expression",
            "Lovingness (affective quality)",
            "Agression",
            "Empathy",
            "Emotions",
            "Psychopathy",
        ],
    ),
    ("Forensic", &["Psychopathy", "Justice involvement"]),
    ("Theoretical", &[]),
    (
        "Identity",
        &[
            "Dehumanization",
            "Family Dynamics",
            "Parenting",
            "Parent child interactions",
            "Infants",
            "Wokeness",
            "Lovingness (self defining)",
            "Psychopathy",
            "Political behaviour",
            "Religion",
        ],
    ),
    (
        "Relationships",
        &[
            "Family Dynamics",
            "Intimate relationships",
            "Parent child interactions",
        ],
    ),
];
