/// Index over a fixed number of items that wraps around at both ends.
///
/// Used for the testimonial slider and the project category filter.
/// With zero items every operation is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = if self.index + 1 >= self.len {
                0
            } else {
                self.index + 1
            };
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = if self.index == 0 {
                self.len - 1
            } else {
                self.index - 1
            };
        }
    }

    /// Jump to `index`; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        let mut carousel = Carousel::new(3);
        carousel.select(2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut carousel = Carousel::new(3);
        carousel.previous();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut carousel = Carousel::new(4);
        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(2);
        carousel.select(1);
        carousel.select(5);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_empty_is_noop() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.previous();
        carousel.select(0);
        assert_eq!(carousel, Carousel::new(0));
        assert!(carousel.is_empty());
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut carousel = Carousel::new(1);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.previous();
        assert_eq!(carousel.index(), 0);
    }
}
