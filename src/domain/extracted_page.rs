#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub title: String,
    /// Main content of the page as markdown, possibly empty.
    pub content: String,
}
