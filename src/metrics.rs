pub const CATEGORY_COLUMN: &str = "Tumor Sub-Compartment";
pub const VERSION_COLUMN: &str = "ModelVersion";
pub const TASK_COLUMN: &str = "TaskName";
pub const COLLABORATOR_COLUMN: &str = "CollaboratorName";
pub const SHARED_MODEL_VALIDATION: &str = "shared_model_validation";

pub const DICE_SOURCE_ROOT: &str = "DICE";
pub const DICE_DISPLAY_ROOT: &str = "DSC";
pub const JACCARD_SOURCE_ROOT: &str = "Jaccard";
pub const JACCARD_DISPLAY_ROOT: &str = "Jaccard";

pub const DISPLAY_NAMES: [&str; 4] = ["Average", "WT", "TC", "ET"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricFamily {
    Dice,
    Jaccard,
}

impl MetricFamily {
    pub fn from_flag(jaccard: bool) -> Self {
        if jaccard {
            MetricFamily::Jaccard
        } else {
            MetricFamily::Dice
        }
    }

    pub fn source_root(self) -> &'static str {
        match self {
            MetricFamily::Dice => DICE_SOURCE_ROOT,
            MetricFamily::Jaccard => JACCARD_SOURCE_ROOT,
        }
    }

    pub fn display_root(self) -> &'static str {
        match self {
            MetricFamily::Dice => DICE_DISPLAY_ROOT,
            MetricFamily::Jaccard => JACCARD_DISPLAY_ROOT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricSpec {
    pub display_names: Vec<String>,
    pub source_columns: Vec<String>,
    pub family: MetricFamily,
}

impl MetricSpec {
    pub fn resolve(family: MetricFamily) -> Self {
        let root = family.source_root();
        let source_columns = vec![
            format!("MeanBinary{root}"),
            format!("binary_{root}_WT"),
            format!("binary_{root}_TC"),
            format!("binary_{root}_ET"),
        ];
        MetricSpec {
            display_names: DISPLAY_NAMES.iter().map(|s| s.to_string()).collect(),
            source_columns,
            family,
        }
    }

    pub fn display_name_for(&self, source_column: &str) -> Option<&str> {
        self.source_columns
            .iter()
            .position(|c| c == source_column)
            .map(|i| self.display_names[i].as_str())
    }
}

pub fn dice_to_jaccard(dice: f64) -> f64 {
    dice / (2.0 - dice)
}
