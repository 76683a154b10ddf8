//! RNG module - next-piece generation
//!
//! Two policies are available through [`Randomizer`]:
//! - **Uniform** (default): every draw is an independent uniform pick over the 7 shapes.
//! - **Bag7**: the 7 shapes are shuffled into a bag and drawn until empty, then a new bag
//!   is shuffled, so no shape is ever missing for long.
//!
//! Both run on a small seeded LCG so a game can be replayed exactly.

use crate::types::Shape;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Takes the high half of the state; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Next-piece selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Randomizer {
    /// Independent uniform choice over the 7 shapes
    #[default]
    Uniform,
    /// Shuffled bag of all 7 shapes
    Bag7,
}

impl Randomizer {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uniform" => Some(Randomizer::Uniform),
            "bag7" | "bag" => Some(Randomizer::Bag7),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag7 => "bag7",
        }
    }
}

/// Seeded source of shapes
#[derive(Debug, Clone)]
pub struct PieceQueue {
    policy: Randomizer,
    /// Current bag of pieces (Bag7 only)
    bag: [Shape; 7],
    /// Index into current bag
    bag_index: usize,
    rng: SimpleRng,
}

impl PieceQueue {
    pub fn new(policy: Randomizer, seed: u32) -> Self {
        Self {
            policy,
            bag: Shape::ALL,
            // Empty bag: the first Bag7 draw shuffles a fresh one.
            bag_index: Shape::ALL.len(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = Shape::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next shape
    pub fn draw(&mut self) -> Shape {
        match self.policy {
            Randomizer::Uniform => {
                let i = self.rng.next_range(Shape::ALL.len() as u32) as usize;
                Shape::ALL[i]
            }
            Randomizer::Bag7 => {
                if self.bag_index >= self.bag.len() {
                    self.refill_bag();
                }
                let shape = self.bag[self.bag_index];
                self.bag_index += 1;
                shape
            }
        }
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(Randomizer::Uniform, 1)
    }
}
