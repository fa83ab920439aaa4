use crate::components::Side;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub human: u8,
    pub computer: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Human => self.human += 1,
            Side::Computer => self.computer += 1,
        }
    }

    pub fn of(&self, side: Side) -> u8 {
        match side {
            Side::Human => self.human,
            Side::Computer => self.computer,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.human >= win_score {
            Some(Side::Human)
        } else if self.computer >= win_score {
            Some(Side::Computer)
        } else {
            None
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub human_scored: bool,
    pub computer_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    /// Both exit conditions held in the same tick. Invariant violation;
    /// exactly one point is still awarded.
    pub double_exit: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
