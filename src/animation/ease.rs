/// Easing curves applied to normalized frame time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity; looping generators use time unchanged.
    Linear,
    /// `1 - (1 - t)^4`: fast start, long settle.
    OutQuart,
}

impl Ease {
    /// Apply the curve. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuart => {
                let u = 1.0 - t;
                1.0 - u * u * u * u
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
