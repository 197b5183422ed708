use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f64,
    pub label_color: String,
    pub label_halo_color: String,
    pub border_fill_opacity: f64,
    pub border_stroke_width: f64,
    pub background: String,
}

impl Theme {
    pub fn atlas() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 14.0,
            label_color: "#1C2430".to_string(),
            label_halo_color: "#FFFFFF".to_string(),
            border_fill_opacity: 0.4,
            border_stroke_width: 2.0,
            background: "#F4F1EA".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 14.0,
            label_color: "#F2F4F8".to_string(),
            label_halo_color: "#10141C".to_string(),
            border_fill_opacity: 0.35,
            border_stroke_width: 2.0,
            background: "#1B2130".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::atlas()
    }
}
