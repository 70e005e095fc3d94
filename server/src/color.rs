use crate::model::ColorModel;

/// Serves the configured background color.
#[derive(Clone, Debug)]
pub struct ColorService {
    color: String,
}

impl ColorService {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }

    pub fn get(&self) -> ColorModel {
        ColorModel {
            color: self.color.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_configured_color() {
        let service = ColorService::new("#336699");
        assert_eq!(service.get().color, "#336699");
    }
}
