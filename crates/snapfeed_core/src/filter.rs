/// Allow-list of image file extensions, each with its leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    allowed: Vec<String>,
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(&[".jpg", ".png"])
    }
}

impl ExtensionFilter {
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        Self {
            allowed: extensions
                .iter()
                .map(|ext| ext.as_ref().to_string())
                .collect(),
        }
    }

    pub fn allows(&self, extension: &str) -> bool {
        self.allowed
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }
}
