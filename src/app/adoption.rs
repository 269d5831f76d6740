use serde::Serialize;

/// One filled-in adoption form.
///
/// Serializable so a future delivery collaborator can encode it; today
/// nothing ships it anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdoptionRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cat_preference: String,
}

/// Outcome of submitting the form. Local intake always accepts; delivery
/// to a backend is an external collaborator that does not exist here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
}

/// Collects adoption requests for the current session.
pub struct AdoptionIntake {
    accepted: u32,
}

impl AdoptionIntake {
    pub fn new() -> Self {
        Self { accepted: 0 }
    }

    /// Accept a request. No field validation happens here; the form's
    /// browser-style input types are the only gate.
    pub fn submit(&mut self, _request: AdoptionRequest) -> SubmitOutcome {
        self.accepted += 1;
        SubmitOutcome::Accepted
    }

    /// How many requests were accepted this session.
    pub fn accepted_count(&self) -> u32 {
        self.accepted
    }
}

impl Default for AdoptionIntake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AdoptionRequest {
        AdoptionRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0101".to_string(),
            cat_preference: "Maine Coon".to_string(),
        }
    }

    #[test]
    fn test_submit_always_accepts() {
        let mut intake = AdoptionIntake::new();
        assert_eq!(intake.submit(request()), SubmitOutcome::Accepted);
    }

    #[test]
    fn test_empty_fields_are_accepted_too() {
        let mut intake = AdoptionIntake::new();
        let empty = AdoptionRequest {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            cat_preference: String::new(),
        };
        assert_eq!(intake.submit(empty), SubmitOutcome::Accepted);
    }

    #[test]
    fn test_accepted_count_increments() {
        let mut intake = AdoptionIntake::new();
        intake.submit(request());
        intake.submit(request());
        assert_eq!(intake.accepted_count(), 2);
    }

    #[test]
    fn test_request_serializes_for_future_delivery() {
        let json = serde_json::to_string(&request()).unwrap();
        assert!(json.contains("ada@example.com"));
        assert!(json.contains("Maine Coon"));
    }
}
