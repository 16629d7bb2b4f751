/// Output of one generation request. Replaced as a whole, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedResult {
    pub url: String,
    pub xml: String,
    pub error: Option<String>,
}

impl GeneratedResult {
    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}
