/// Series colors for chart datasets, cycled deterministically. The counter
/// is scoped to one `Palette` value per chart build, so two sections built
/// back to back both start from index 0 without any reset discipline.
const FILL: [&str; 10] = [
    "rgba(54, 162, 235, 0.35)",
    "rgba(255, 99, 132, 0.35)",
    "rgba(75, 192, 192, 0.35)",
    "rgba(255, 159, 64, 0.35)",
    "rgba(153, 102, 255, 0.35)",
    "rgba(255, 205, 86, 0.35)",
    "rgba(201, 203, 207, 0.35)",
    "rgba(22, 160, 133, 0.35)",
    "rgba(231, 76, 60, 0.35)",
    "rgba(52, 73, 94, 0.35)",
];

const BORDER: [&str; 10] = [
    "rgb(54, 162, 235)",
    "rgb(255, 99, 132)",
    "rgb(75, 192, 192)",
    "rgb(255, 159, 64)",
    "rgb(153, 102, 255)",
    "rgb(255, 205, 86)",
    "rgb(201, 203, 207)",
    "rgb(22, 160, 133)",
    "rgb(231, 76, 60)",
    "rgb(52, 73, 94)",
];

#[derive(Debug, Default)]
pub struct Palette {
    counter: usize,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next fill color and advances the counter.
    pub fn next(&mut self) -> &'static str {
        let color = FILL[self.counter % FILL.len()];
        self.counter += 1;
        color
    }

    /// Border color paired with the most recently issued fill. Callers must
    /// call `next()` first; before any `next()` this pairs with index 0.
    pub fn next_border(&self) -> &'static str {
        BORDER[self.counter.saturating_sub(1) % BORDER.len()]
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }
}
