//! Color generation with per-batch name deduplication.

use rand::Rng;
use tracing::debug;

use dealership::models::NewColor;

/// Upper bound for a color's price, inclusive.
pub const COLOR_PRICE_MAX: f64 = 1000.0;

const DEFAULT_PALETTE: [&str; 20] = [
    "amarelo",
    "azul",
    "azul-marinho",
    "bege",
    "bordô",
    "branco",
    "cinza",
    "dourado",
    "grafite",
    "laranja",
    "lilás",
    "marrom",
    "prata",
    "preto",
    "rosa",
    "roxo",
    "turquesa",
    "verde",
    "verde-oliva",
    "vermelho",
];

/// Generates named colors for the bulk color insert.
pub struct ColorGenerator {
    palette: Vec<&'static str>,
}

impl ColorGenerator {
    /// Creates a generator drawing from the default palette.
    pub fn new() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }

    /// Creates a generator drawing from a custom palette.
    pub fn with_palette(palette: Vec<&'static str>) -> Self {
        Self { palette }
    }

    /// Draws `attempts` color names and keeps the first occurrence of each.
    ///
    /// The result holds at most `attempts` colors, all with distinct names.
    pub fn generate_batch(&self, attempts: usize, rng: &mut impl Rng) -> Vec<NewColor> {
        let mut colors: Vec<NewColor> = Vec::with_capacity(attempts);

        for _ in 0..attempts {
            let Some(name) = self.generate_name(rng) else {
                break;
            };

            if colors.iter().any(|c| c.name == name) {
                debug!("Skipping duplicate color {name}");
                continue;
            }

            colors.push(NewColor::new(name, generate_price(rng)));
        }

        colors
    }

    /// Picks a name from the palette. `None` if the palette is empty.
    fn generate_name(&self, rng: &mut impl Rng) -> Option<&'static str> {
        if self.palette.is_empty() {
            return None;
        }
        Some(self.palette[rng.gen_range(0..self.palette.len())])
    }
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Price in [0, COLOR_PRICE_MAX], rounded to cents.
fn generate_price(rng: &mut impl Rng) -> f64 {
    let price: f64 = rng.gen_range(0.0..=COLOR_PRICE_MAX);
    (price * 100.0).round() / 100.0
}
