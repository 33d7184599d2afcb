use serde::{Deserialize, Serialize};

/// Anatomical layer of an idealized aneurysm, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    /// Flow-carrying cavity. Carries the thrombus carve-out.
    Lumen,
    Intima,
    Media,
    Adventitia,
}

impl LayerKind {
    /// Construction order. Each layer wraps the previous one.
    pub const ALL: [LayerKind; 4] = [
        LayerKind::Lumen,
        LayerKind::Intima,
        LayerKind::Media,
        LayerKind::Adventitia,
    ];

    /// Prefix used for the names of this layer's sections.
    pub fn prefix(self) -> &'static str {
        match self {
            LayerKind::Lumen => "fluid",
            LayerKind::Intima => "intima",
            LayerKind::Media => "media",
            LayerKind::Adventitia => "adventitia",
        }
    }

    /// Name of the lofted shell built from this layer's sections.
    pub fn shell_name(self) -> &'static str {
        match self {
            LayerKind::Lumen => "aneurysm_inner",
            LayerKind::Intima => "intima_outer",
            LayerKind::Media => "media_outer",
            LayerKind::Adventitia => "adventitia_outer",
        }
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_and_shells_are_distinct() {
        let prefixes: std::collections::HashSet<_> =
            LayerKind::ALL.iter().map(|k| k.prefix()).collect();
        let shells: std::collections::HashSet<_> =
            LayerKind::ALL.iter().map(|k| k.shell_name()).collect();
        assert_eq!(prefixes.len(), 4);
        assert_eq!(shells.len(), 4);
    }

    #[test]
    fn lumen_is_innermost() {
        assert_eq!(LayerKind::ALL[0], LayerKind::Lumen);
        assert_eq!(LayerKind::Lumen.to_string(), "fluid");
    }
}
