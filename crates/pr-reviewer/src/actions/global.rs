//! Global actions - not tied to any specific slice

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalAction {
    /// Quit the application
    Quit,
}
