/// Position of one sidebar button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonLayout {
    pub index: usize,
    /// Offset from the top of the sidebar in pixels
    pub top: f64,
}

/// Stack `count` buttons of `height` pixels from the top
pub fn button_layouts(count: usize, height: f64) -> Vec<ButtonLayout> {
    (0..count)
        .map(|index| ButtonLayout {
            index,
            top: index as f64 * height,
        })
        .collect()
}
