/// Front-end route of the side-by-side comparison view.
pub const COMPARISON_ROUTE: &str = "/recruiter/applications/comparison";
pub const CANDIDATES_PARAM: &str = "candidates";
/// Fewest candidates a comparison can be opened with.
pub const MIN_COMPARISON_SIZE: usize = 2;

/// Applicant ids picked for comparison, in the order they were picked.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSelection {
    active: bool,
    selected: Vec<String>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flip comparison mode. The selection is cleared both ways.
    pub fn toggle_mode(&mut self) -> bool {
        self.active = !self.active;
        self.selected.clear();
        self.active
    }

    pub fn enter(&mut self) {
        self.active = true;
        self.selected.clear();
    }

    pub fn exit(&mut self) {
        self.active = false;
        self.selected.clear();
    }

    /// Returns whether `id` is selected after the toggle.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.selected.iter().position(|selected| selected == id) {
            Some(index) => {
                self.selected.remove(index);
                false
            }
            None => {
                self.selected.push(id.to_string());
                true
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|selected| selected == id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.selected
    }

    pub fn can_compare(&self) -> bool {
        self.selected.len() >= MIN_COMPARISON_SIZE
    }

    /// Navigation target for the compare action, `None` until it is enabled.
    pub fn comparison_url(&self) -> Option<String> {
        self.can_compare().then(|| {
            format!(
                "{COMPARISON_ROUTE}?{CANDIDATES_PARAM}={}",
                self.selected.join(",")
            )
        })
    }
}

/// Set semantics: selection order does not affect equality.
impl PartialEq for ComparisonSelection {
    fn eq(&self, other: &Self) -> bool {
        self.active == other.active
            && self.selected.len() == other.selected.len()
            && self.selected.iter().all(|id| other.contains(id))
    }
}

impl Eq for ComparisonSelection {}

/// Parse a `candidates` query value back into distinct ids.
pub fn parse_candidates(raw: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for id in raw.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        if !ids.iter().any(|existing| existing == id) {
            ids.push(id.to_string());
        }
    }
    ids
}
