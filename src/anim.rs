//! Pure animation math and state, shared between the wasm frontend and
//! host-side tests. Nothing in here touches the DOM.

pub const TYPED_TITLES: [&str; 6] = [
    "Data Engineer",
    "Pipeline Architect",
    "PySpark Expert",
    "AWS Specialist",
    "Spark Wizard",
    "ETL Craftsman",
];

pub const TYPE_START_DELAY_MS: u32 = 1_000;
const TYPE_CHAR_DELAY_MS: u32 = 100;
const DELETE_CHAR_DELAY_MS: u32 = 50;
const FULL_WORD_HOLD_MS: u32 = 2_000;
const EMPTY_REST_MS: u32 = 500;

pub const COUNTER_DURATION_MS: f64 = 2_000.0;

const NAV_SCROLLED_THRESHOLD_PX: f64 = 50.0;
const SECTION_PROBE_OFFSET_PX: f64 = 100.0;
pub const ANCHOR_SCROLL_MARGIN_PX: f64 = 80.0;

const RAIN_COLUMN_STRIDE_PX: f64 = 60.0;

/// One step of the headline animation: the text to show and how long to
/// wait before the next step.
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

/// Cycles a fixed title list through type / hold / delete / rest phases.
/// `tick` never terminates the cycle; the caller loops for the page's life.
pub struct TypingAnimator {
    titles: &'static [&'static str],
    title_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingAnimator {
    pub fn new(titles: &'static [&'static str]) -> Self {
        Self {
            titles,
            title_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn tick(&mut self) -> TypingFrame {
        let current = self.titles[self.title_index];
        let char_count = current.chars().count();

        let mut delay_ms = if self.deleting {
            self.char_index -= 1;
            DELETE_CHAR_DELAY_MS
        } else {
            self.char_index += 1;
            TYPE_CHAR_DELAY_MS
        };
        let text: String = current.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == char_count {
            delay_ms = FULL_WORD_HOLD_MS;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.title_index = (self.title_index + 1) % self.titles.len();
            delay_ms = EMPTY_REST_MS;
        }

        TypingFrame { text, delay_ms }
    }
}

pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

/// Per-element counter parameters, read once from the element's data
/// attributes when its observer first fires.
pub struct CounterSpec {
    pub target: f64,
    pub suffix: String,
    pub decimal: bool,
}

impl CounterSpec {
    pub fn display_at(&self, elapsed_ms: f64) -> String {
        let progress = (elapsed_ms / COUNTER_DURATION_MS).clamp(0.0, 1.0);
        let current = self.target * ease_out_quart(progress);

        if self.decimal {
            format!("{current:.1}{}", self.suffix)
        } else {
            format!("{}{}", current.floor() as i64, self.suffix)
        }
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= COUNTER_DURATION_MS
    }
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD_PX
}

pub fn section_contains(scroll_y: f64, section_top: f64, section_height: f64) -> bool {
    let band_start = section_top - SECTION_PROBE_OFFSET_PX;
    scroll_y > band_start && scroll_y <= band_start + section_height
}

/// Picks the nav link to highlight for the current scroll offset. When
/// bands overlap, the last matching section in document order wins.
pub fn active_section<'a>(scroll_y: f64, sections: &[(&'a str, f64, f64)]) -> Option<&'a str> {
    let mut active = None;
    for (id, top, height) in sections {
        if section_contains(scroll_y, *top, *height) {
            active = Some(*id);
        }
    }
    active
}

pub fn anchor_scroll_target(offset_top: f64) -> f64 {
    offset_top - ANCHOR_SCROLL_MARGIN_PX
}

/// Column count is fixed at init time; later resizes do not re-rake the rain.
pub fn rain_column_count(viewport_width: f64) -> usize {
    if viewport_width <= 0.0 {
        return 0;
    }
    (viewport_width / RAIN_COLUMN_STRIDE_PX).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_one_title(animator: &mut TypingAnimator) -> Vec<TypingFrame> {
        let mut frames = Vec::new();
        loop {
            let frame = animator.tick();
            let done = frame.text.is_empty() && frame.delay_ms == EMPTY_REST_MS;
            frames.push(frame);
            if done {
                return frames;
            }
        }
    }

    #[test]
    fn typing_frames_are_prefixes_of_current_title() {
        let mut animator = TypingAnimator::new(&TYPED_TITLES);
        for frame in drain_one_title(&mut animator) {
            assert!(
                TYPED_TITLES[0].starts_with(&frame.text),
                "{:?} is not a prefix of {:?}",
                frame.text,
                TYPED_TITLES[0]
            );
        }
    }

    #[test]
    fn full_cycle_advances_title_by_one() {
        let mut animator = TypingAnimator::new(&TYPED_TITLES);
        drain_one_title(&mut animator);
        assert_eq!(animator.title_index, 1);

        for _ in 0..TYPED_TITLES.len() - 1 {
            drain_one_title(&mut animator);
        }
        assert_eq!(animator.title_index, 0, "title index wraps after the last entry");
    }

    #[test]
    fn completed_word_holds_before_deleting() {
        let mut animator = TypingAnimator::new(&TYPED_TITLES);
        let frames = drain_one_title(&mut animator);
        let full = frames
            .iter()
            .find(|frame| frame.text == TYPED_TITLES[0])
            .expect("the full title is displayed at some point");
        assert_eq!(full.delay_ms, FULL_WORD_HOLD_MS);
    }

    #[test]
    fn deleting_is_faster_than_typing() {
        let mut animator = TypingAnimator::new(&TYPED_TITLES);
        let frames = drain_one_title(&mut animator);
        let full_at = frames
            .iter()
            .position(|frame| frame.text == TYPED_TITLES[0])
            .unwrap();
        assert!(frames[..full_at]
            .iter()
            .all(|frame| frame.delay_ms == TYPE_CHAR_DELAY_MS));
        assert!(frames[full_at + 1..frames.len() - 1]
            .iter()
            .all(|frame| frame.delay_ms == DELETE_CHAR_DELAY_MS));
    }

    #[test]
    fn ease_out_quart_bounds() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);

        let mut previous = 0.0;
        for step in 1..=20 {
            let eased = ease_out_quart(f64::from(step) / 20.0);
            assert!(eased > previous);
            previous = eased;
        }
    }

    #[test]
    fn counter_display_integer_with_suffix() {
        let spec = CounterSpec {
            target: 850_000.0,
            suffix: "+".to_string(),
            decimal: false,
        };

        assert_eq!(spec.display_at(0.0), "0+");
        assert_eq!(spec.display_at(2_000.0), "850000+");
        assert_eq!(spec.display_at(3_500.0), "850000+");

        let mut previous = -1.0;
        for elapsed in (0..=2_000).step_by(100) {
            let shown = spec.display_at(f64::from(elapsed));
            let value: f64 = shown.trim_end_matches('+').parse().unwrap();
            assert!(value >= previous, "counter never moves backwards");
            previous = value;
        }
    }

    #[test]
    fn counter_display_decimal() {
        let spec = CounterSpec {
            target: 99.9,
            suffix: "%".to_string(),
            decimal: true,
        };
        assert_eq!(spec.display_at(2_000.0), "99.9%");
        assert_eq!(spec.display_at(0.0), "0.0%");
    }

    #[test]
    fn counter_done_exactly_at_duration() {
        let spec = CounterSpec {
            target: 3.0,
            suffix: String::new(),
            decimal: false,
        };
        assert!(!spec.is_done(1_999.9));
        assert!(spec.is_done(2_000.0));
    }

    #[test]
    fn navbar_scrolled_boundary() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(51.0));
    }

    #[test]
    fn section_band_is_half_open() {
        // Band for (top=500, height=400) is (400, 800].
        assert!(!section_contains(400.0, 500.0, 400.0));
        assert!(section_contains(401.0, 500.0, 400.0));
        assert!(section_contains(800.0, 500.0, 400.0));
        assert!(!section_contains(801.0, 500.0, 400.0));
    }

    #[test]
    fn last_matching_section_wins() {
        let sections = [
            ("home", 0.0, 600.0),
            ("about", 450.0, 300.0),
            ("skills", 700.0, 500.0),
        ];

        assert_eq!(active_section(200.0, &sections), Some("home"));
        // home's band (−100, 500] and about's (350, 650] overlap at 400.
        assert_eq!(active_section(400.0, &sections), Some("about"));
        assert_eq!(active_section(2_000.0, &sections), None);
    }

    #[test]
    fn anchor_target_subtracts_fixed_margin() {
        assert_eq!(anchor_scroll_target(1_000.0), 920.0);
        assert_eq!(anchor_scroll_target(80.0), 0.0);
    }

    #[test]
    fn rain_columns_floor_of_width_over_stride() {
        assert_eq!(rain_column_count(1_280.0), 21);
        assert_eq!(rain_column_count(800.0), 13);
        assert_eq!(rain_column_count(59.0), 0);
        assert_eq!(rain_column_count(0.0), 0);
        assert_eq!(rain_column_count(-10.0), 0);
    }
}
