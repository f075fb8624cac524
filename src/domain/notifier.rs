//! Notification sink shared by the demonstrations.
//!
//! Everything a device or a unit "says" goes through a [`Notifier`], so the
//! caller decides whether it lands on a terminal or in a [`Transcript`].

/// Receives notifications in emission order.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Collects notifications in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl Notifier for Transcript {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_transcript_when_notified_then_keeps_emission_order() {
        let mut transcript = Transcript::new();
        transcript.notify("first");
        transcript.notify("second");

        assert_eq!(transcript.messages(), ["first", "second"]);
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn given_borrowed_transcript_when_notified_through_reference_then_records() {
        let mut transcript = Transcript::new();
        {
            let sink: &mut dyn Notifier = &mut transcript;
            sink.notify("via reference");
        }
        assert_eq!(transcript.into_messages(), vec!["via reference"]);
    }
}
