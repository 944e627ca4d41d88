use serde::{Deserialize, Serialize};

/// Delivery horizon of a commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizon {
    /// Near term.
    H1,
    /// Medium term.
    H2,
    /// Long term.
    H3,
    /// Any value the client does not recognise.
    #[serde(other)]
    Unknown,
}

impl Horizon {
    /// Sort priority. Unknown horizons sort last.
    pub fn priority(&self) -> u16 {
        match self {
            Horizon::H1 => 1,
            Horizon::H2 => 2,
            Horizon::H3 => 3,
            Horizon::Unknown => 999,
        }
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Horizon::H1 => write!(f, "H1"),
            Horizon::H2 => write!(f, "H2"),
            Horizon::H3 => write!(f, "H3"),
            Horizon::Unknown => write!(f, "?"),
        }
    }
}

/// One statement of the vision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionStatement {
    #[serde(default)]
    pub id: Option<String>,
    pub statement: String,
}

/// Top tier: where the organisation is heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vision {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub statements: Vec<VisionStatement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Behaviour {
    pub id: String,
    pub statement: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub value_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicDriver {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicIntent {
    pub id: String,
    pub statement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enabler {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub driver_ids: Vec<String>,
}

/// A flagship commitment the strategy is delivered through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconicCommitment {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon: Option<Horizon>,
    /// Raw date string as stored by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_driver_id: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub primary_intent_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamObjective {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_commitment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualObjective {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual_name: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub team_objective_ids: Vec<String>,
}

/// Client-side copy of a session's pyramid, replaced wholesale on refetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pyramid {
    #[serde(default)]
    pub vision: Option<Vision>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub values: Vec<Value>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub behaviours: Vec<Behaviour>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub strategic_drivers: Vec<StrategicDriver>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub strategic_intents: Vec<StrategicIntent>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub enablers: Vec<Enabler>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub iconic_commitments: Vec<IconicCommitment>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub team_objectives: Vec<TeamObjective>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub individual_objectives: Vec<IndividualObjective>,
}

impl Pyramid {
    /// True when a vision exists and has at least one statement.
    pub fn vision_exists(&self) -> bool {
        self.vision
            .as_ref()
            .is_some_and(|vision| !vision.statements.is_empty())
    }

    /// Look up a driver by id.
    pub fn driver(&self, id: &str) -> Option<&StrategicDriver> {
        self.strategic_drivers.iter().find(|d| d.id == id)
    }

    /// Look up a commitment by id.
    pub fn commitment(&self, id: &str) -> Option<&IconicCommitment> {
        self.iconic_commitments.iter().find(|c| c.id == id)
    }
}

/// A pyramid tier, as addressed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PyramidTier {
    Vision,
    Value,
    Behaviour,
    StrategicDriver,
    StrategicIntent,
    Enabler,
    IconicCommitment,
    TeamObjective,
    IndividualObjective,
}

impl PyramidTier {
    /// Tiers from top to bottom.
    pub const ALL: [PyramidTier; 9] = [
        PyramidTier::Vision,
        PyramidTier::Value,
        PyramidTier::Behaviour,
        PyramidTier::StrategicDriver,
        PyramidTier::StrategicIntent,
        PyramidTier::Enabler,
        PyramidTier::IconicCommitment,
        PyramidTier::TeamObjective,
        PyramidTier::IndividualObjective,
    ];

    /// URL path segment under `/pyramid/`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            PyramidTier::Vision => "vision",
            PyramidTier::Value => "values",
            PyramidTier::Behaviour => "behaviours",
            PyramidTier::StrategicDriver => "strategic-drivers",
            PyramidTier::StrategicIntent => "strategic-intents",
            PyramidTier::Enabler => "enablers",
            PyramidTier::IconicCommitment => "iconic-commitments",
            PyramidTier::TeamObjective => "team-objectives",
            PyramidTier::IndividualObjective => "individual-objectives",
        }
    }
}
