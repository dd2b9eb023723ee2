//! Page settings handed to the spreadsheet converter.

use crate::document::{Margins, Orientation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageOrientation {
    /// Let the converter pick based on the sheet dimensions.
    #[default]
    Auto,
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleMode {
    #[default]
    Auto,
    FitWidth,
    FitPage,
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageSize {
    /// Size follows the content of the sheet.
    #[default]
    Auto,
    A4,
    Letter,
}

impl PageSize {
    /// Page size in points, `None` for [`PageSize::Auto`].
    pub fn dimensions(&self, orientation: Orientation) -> Option<(f32, f32)> {
        let (width, height) = match self {
            PageSize::Auto => return None,
            PageSize::A4 => (595.0, 842.0),
            PageSize::Letter => (612.0, 792.0),
        };
        Some(match orientation {
            Orientation::Portrait => (width, height),
            Orientation::Landscape => (height, width),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageStyle {
    /// Margin on every side, in millimetres.
    pub margin_mm: f32,
    pub orientation: PageOrientation,
    pub scale_mode: ScaleMode,
    pub page_size: PageSize,
}

impl Default for PageStyle {
    fn default() -> Self {
        PageStyle {
            margin_mm: 0.0,
            orientation: PageOrientation::Auto,
            scale_mode: ScaleMode::Auto,
            page_size: PageSize::Auto,
        }
    }
}

impl PageStyle {
    pub fn margins(&self) -> Margins {
        Margins::uniform_mm(self.margin_mm)
    }

    /// The fixed orientation, if one was asked for.
    pub fn fixed_orientation(&self) -> Option<Orientation> {
        match self.orientation {
            PageOrientation::Auto => None,
            PageOrientation::Portrait => Some(Orientation::Portrait),
            PageOrientation::Landscape => Some(Orientation::Landscape),
        }
    }
}
