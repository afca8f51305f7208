/// Suffix of the element that shows a slider's current value.
pub const READOUT_SUFFIX: &str = "-value";

pub fn readout_id(slider_id: &str) -> String {
    format!("{slider_id}{READOUT_SUFFIX}")
}

/// Live text of the readout bound to one range input.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeReadout {
    slider_id: String,
    text: String,
}

impl RangeReadout {
    pub fn new(slider_id: impl Into<String>, initial: impl ToString) -> Self {
        Self {
            slider_id: slider_id.into(),
            text: initial.to_string(),
        }
    }

    /// Mirror the slider's value exactly as the input reports it.
    pub fn on_input(&mut self, value: &str) {
        self.text.clear();
        self.text.push_str(value);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn readout_id(&self) -> String {
        readout_id(&self.slider_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout_follows_input() {
        let mut readout = RangeReadout::new("weight_participants", 1.0);
        assert_eq!(readout.text(), "1");
        assert_eq!(readout.readout_id(), "weight_participants-value");

        readout.on_input("2.5");
        assert_eq!(readout.text(), "2.5");
        readout.on_input("0");
        assert_eq!(readout.text(), "0");
    }
}
