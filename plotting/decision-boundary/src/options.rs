use crate::DEFAULT_RESOLUTION;

/// Display and grid settings for [`render`](crate::render).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate", default)
)]
pub struct RenderOptions {
    /// Caption above the plot. `None` draws no caption.
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    /// Color specifiers (CSS names or hex) spanning the predicted classes.
    pub background_colors: Vec<String>,
    /// Marker colors for the first distinct labels, in label order.
    pub point_colors: Vec<String>,
    pub width: u32,
    pub height: u32,
    /// Grid subdivisions per axis.
    pub resolution: usize,
    /// Padding on each axis as a fraction of that column's maximum value.
    pub margin_ratio: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: None,
            x_label: "センサー1".to_string(),
            y_label: "センサー2".to_string(),
            background_colors: vec!["#F1F8E9".to_string(), "#FCE4EC".to_string()],
            point_colors: vec![
                "blue".to_string(),
                "tomato".to_string(),
                "orange".to_string(),
            ],
            width: 600,
            height: 400,
            resolution: DEFAULT_RESOLUTION,
            margin_ratio: 0.1,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn background_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.background_colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn point_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.point_colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.title, None);
        assert_eq!(options.background_colors, ["#F1F8E9", "#FCE4EC"]);
        assert_eq!(options.point_colors, ["blue", "tomato", "orange"]);
        assert_eq!((options.width, options.height), (600, 400));
        assert_eq!(options.resolution, 200);
    }

    #[test]
    fn test_builder_overrides() {
        let options = RenderOptions::new()
            .title("Iris")
            .x_label("petal length")
            .background_colors(["white", "black"])
            .size(300, 200);
        assert_eq!(options.title.as_deref(), Some("Iris"));
        assert_eq!(options.x_label, "petal length");
        assert_eq!(options.y_label, "センサー2");
        assert_eq!(options.background_colors, ["white", "black"]);
        assert_eq!(options.width, 300);
    }
}
