/// Generation-token debounce. Each new input arms a fresh token and
/// invalidates every earlier pending execution; when a delayed callback
/// finally runs it fires only if its token is still the current one.
#[derive(Default)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }
}
