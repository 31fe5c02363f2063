use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base name (extension stripped) of the file holding template parameters.
pub const PARAMS_FILE_STEM: &str = "params";
/// Base name (extension stripped) of the file holding template outputs.
pub const OUTPUTS_FILE_STEM: &str = "outputs";
/// Extensions recognized as addon fragments. Matched exactly, dot included.
pub const YAML_EXTENSIONS: [&str; 2] = [".yaml", ".yml"];

/// One file read from a service's addons directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonFile {
    pub name: String,
    pub content: String,
}

/// The template section an addons file contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Parameters,
    Outputs,
    Resources,
}

impl Category {
    /// All categories, in the order missing ones are reported.
    pub const ALL: [Category; 3] = [Category::Parameters, Category::Outputs, Category::Resources];

    /// Maps a file's base name to its category. Anything unreserved is a resource.
    pub fn from_stem(stem: &str) -> Self {
        match stem {
            PARAMS_FILE_STEM => Category::Parameters,
            OUTPUTS_FILE_STEM => Category::Outputs,
            _ => Category::Resources,
        }
    }

    pub fn merge_strategy(self) -> MergeStrategy {
        match self {
            Category::Parameters | Category::Outputs => MergeStrategy::Replace,
            Category::Resources => MergeStrategy::Append,
        }
    }

    /// What the user has to add to satisfy this category.
    pub fn requirement(self) -> &'static str {
        match self {
            Category::Parameters => "params.yaml",
            Category::Outputs => "outputs.yaml",
            Category::Resources => r#"at least one resource YAML file such as "s3-bucket.yaml""#,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Parameters => "parameters",
            Category::Outputs => "outputs",
            Category::Resources => "resources",
        };
        f.write_str(name)
    }
}

/// How a slot absorbs another file's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// The slot holds only the most recently folded content.
    Replace,
    /// Content accumulates in fold order.
    Append,
}

/// The merged content of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    strategy: MergeStrategy,
    blocks: Vec<String>,
}

impl Slot {
    pub fn new(strategy: MergeStrategy) -> Self {
        Self {
            strategy,
            blocks: Vec::new(),
        }
    }

    pub fn fold(&mut self, content: String) {
        if self.strategy == MergeStrategy::Replace {
            self.blocks.clear();
        }
        self.blocks.push(content);
    }

    pub fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    /// Per-file contents currently held, in fold order.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// The slot as one text block.
    ///
    /// `Append` slots terminate every block with a newline (`"A\nB\n"`), `Replace` slots
    /// return their single block untouched.
    pub fn text(&self) -> String {
        match self.strategy {
            MergeStrategy::Replace => self.blocks.last().cloned().unwrap_or_default(),
            MergeStrategy::Append => self.blocks.iter().map(|b| format!("{}\n", b)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text().trim().is_empty()
    }
}

/// Accumulator filled by folding every classified addons file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedAddons {
    pub parameters: Slot,
    pub outputs: Slot,
    pub resources: Slot,
}

impl Default for AggregatedAddons {
    fn default() -> Self {
        Self {
            parameters: Slot::new(Category::Parameters.merge_strategy()),
            outputs: Slot::new(Category::Outputs.merge_strategy()),
            resources: Slot::new(Category::Resources.merge_strategy()),
        }
    }
}

impl AggregatedAddons {
    pub fn slot(&self, category: Category) -> &Slot {
        match category {
            Category::Parameters => &self.parameters,
            Category::Outputs => &self.outputs,
            Category::Resources => &self.resources,
        }
    }

    pub fn fold(&mut self, category: Category, content: String) {
        let slot = match category {
            Category::Parameters => &mut self.parameters,
            Category::Outputs => &mut self.outputs,
            Category::Resources => &mut self.resources,
        };
        slot.fold(content);
    }

    /// Categories whose slot is still empty, in reporting order.
    pub fn missing(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.slot(*c).is_empty())
            .collect()
    }
}

/// Order in which listed files are folded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingOrder {
    /// Whatever order the workspace reader returned.
    #[default]
    AsListed,
    /// Lexicographic by filename.
    Sorted,
}

/// How merged sections are handed to the template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitMode {
    /// One entry per line of the merged section.
    #[default]
    Lines,
    /// One entry per source file.
    Blocks,
}

impl fmt::Display for ListingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingOrder::AsListed => f.write_str("as-listed"),
            ListingOrder::Sorted => f.write_str("sorted"),
        }
    }
}

impl FromStr for ListingOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "as-listed" => Ok(ListingOrder::AsListed),
            "sorted" => Ok(ListingOrder::Sorted),
            other => Err(format!(
                "Invalid listing order: {} (expected 'as-listed' or 'sorted')",
                other
            )),
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitMode::Lines => f.write_str("lines"),
            SplitMode::Blocks => f.write_str("blocks"),
        }
    }
}

impl FromStr for SplitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lines" => Ok(SplitMode::Lines),
            "blocks" => Ok(SplitMode::Blocks),
            other => Err(format!(
                "Invalid split mode: {} (expected 'lines' or 'blocks')",
                other
            )),
        }
    }
}
