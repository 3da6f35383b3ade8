#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextCard,
    PrevCard,
    FirstCard,
    LastCard,
    SelectCard(usize),
    ToggleLike,
    ToggleHelp,
    Resize,
}
