// Simple color struct for building the canvas fill and stroke style strings

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    // The page's gold accent, shared by particles and connection lines
    pub const LATTICE: Color = Color {
        r: 198,
        g: 168,
        b: 124,
    };

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_gold_formats() {
        assert_eq!(Color::LATTICE.hex(), "#c6a87c");
        assert_eq!(Color::LATTICE.rgba(0.15), "rgba(198, 168, 124, 0.15)");
    }

    #[test]
    fn from_u32_unpacks_rrggbb() {
        assert_eq!(Color::from_u32(0xc6a87c), Color::LATTICE);
    }
}
