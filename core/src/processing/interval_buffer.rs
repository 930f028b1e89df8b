use crate::survey::{Side, SwathRecord};

/// Records gathered since the last decimation event.
///
/// The per-side width vectors mirror `records` index for index. They are
/// only ever pushed and cleared together with it.
#[derive(Debug, Default)]
pub struct IntervalBuffer {
    records: Vec<SwathRecord>,
    stbd_widths: Vec<f64>,
    port_widths: Vec<f64>,
}

impl IntervalBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: SwathRecord) {
        self.stbd_widths.push(record.swath_stbd);
        self.port_widths.push(record.swath_port);
        self.records.push(record);
    }

    /// Width mirror for `side`, `None` for `Side::Unknown`.
    pub fn widths(&self, side: Side) -> Option<&[f64]> {
        match side {
            Side::Starboard => Some(&self.stbd_widths),
            Side::Port => Some(&self.port_widths),
            Side::Unknown => None,
        }
    }

    pub fn get(&self, index: usize) -> Option<&SwathRecord> {
        self.records.get(index)
    }

    pub fn first(&self) -> Option<&SwathRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&SwathRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.stbd_widths.clear();
        self.port_widths.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_mirror_records() {
        let mut buffer = IntervalBuffer::new();
        buffer.push(SwathRecord::new(0.0, 0.0, 0.0, 5.0, 6.0, 1.0));
        buffer.push(SwathRecord::new(1.0, 0.0, 0.0, 7.0, 2.0, 1.0));

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.widths(Side::Starboard).unwrap(), &[5.0, 7.0]);
        assert_eq!(buffer.widths(Side::Port).unwrap(), &[6.0, 2.0]);
        assert!(buffer.widths(Side::Unknown).is_none());
        assert_eq!(buffer.last().unwrap().x, 1.0);
    }

    #[test]
    fn clear_empties_every_mirror() {
        let mut buffer = IntervalBuffer::new();
        buffer.push(SwathRecord::new(0.0, 0.0, 0.0, 5.0, 6.0, 1.0));
        buffer.clear();

        assert!(buffer.is_empty());
        assert!(buffer.widths(Side::Starboard).unwrap().is_empty());
        assert!(buffer.widths(Side::Port).unwrap().is_empty());
    }
}
