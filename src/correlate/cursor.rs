use crate::capture::Record;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Matched(usize),
    Lost,
}

// Forward-only matcher over the destination sequence. The window is counted
// from the most recent match, which itself occupies the first slot.
pub struct Cursor<'a> {
    dst:    &'a [Record],
    window: Option<usize>,
    origin: usize,
    next:   usize,
}

impl<'a> Cursor<'a> {
    pub fn new(dst: &'a [Record], window: Option<usize>) -> Self {
        Self {
            dst:    dst,
            window: window,
            origin: 0,
            next:   0,
        }
    }

    pub fn step(&mut self, rec: &Record) -> Outcome {
        let end = match self.window {
            Some(n) => self.origin.saturating_add(n).min(self.dst.len()),
            None    => self.dst.len(),
        };
        let start = self.next.min(end);

        match self.dst[start..end].iter().position(|r| r.hash == rec.hash) {
            Some(j) => {
                let index   = start + j;
                self.origin = index;
                self.next   = index + 1;
                Outcome::Matched(index)
            }
            None => Outcome::Lost,
        }
    }

    pub fn next_index(&self) -> usize {
        self.next.min(self.last_index())
    }

    pub fn last_index(&self) -> usize {
        self.dst.len().saturating_sub(1)
    }

    pub fn exhausted(&self) -> bool {
        self.next >= self.dst.len()
    }
}

pub fn correlate(src: &[Record], dst: &[Record], window: Option<usize>) -> Vec<Outcome> {
    let mut cursor = Cursor::new(dst, window);
    src.iter().map(|rec| cursor.step(rec)).collect()
}
