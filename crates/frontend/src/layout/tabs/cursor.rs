//! Курсор раздела: индекс текущего раздела + флаг незавершённого перехода.
//!
//! Пока переход "в полёте", любые запросы на смену раздела игнорируются.
//! Флаг снимается извне по таймеру (`TRANSITION_MS`).

/// Длительность анимации перехода, в течение которой ввод игнорируется
pub const TRANSITION_MS: u32 = 800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCursor {
    index: usize,
    len: usize,
    in_flight: bool,
}

impl SectionCursor {
    pub fn new(len: usize, index: usize) -> Self {
        Self {
            index: index.min(len.saturating_sub(1)),
            len,
            in_flight: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn next(&mut self) -> Option<usize> {
        self.goto(self.index.saturating_add(1).min(self.len.saturating_sub(1)))
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.goto(self.index.saturating_sub(1))
    }

    pub fn first(&mut self) -> Option<usize> {
        self.goto(0)
    }

    pub fn last(&mut self) -> Option<usize> {
        self.goto(self.len.saturating_sub(1))
    }

    /// Начинает переход к `target`. `None`, если переход идёт, индекс вне
    /// диапазона или курсор уже там.
    pub fn goto(&mut self, target: usize) -> Option<usize> {
        if self.in_flight || target >= self.len || target == self.index {
            return None;
        }
        self.index = target;
        self.in_flight = true;
        Some(target)
    }

    pub fn finish_transition(&mut self) {
        self.in_flight = false;
    }
}
