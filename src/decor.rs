//! Parameter sampling for the background decorations. Each struct captures
//! one unit's randomized look as plain numbers and renders the inline style
//! text applied once at creation; the looping motion itself lives in named
//! CSS animations. Samplers take the random source as a closure so tests can
//! drive them deterministically.

pub const PARTICLE_COUNT: usize = 50;
pub const FLOW_LINE_COUNT: usize = 5;
pub const PIPELINE_NODE_COUNT: usize = 8;

const RAIN_GLYPHS: [char; 21] = [
    '0', '1', '｛', '｝', '[', ']', '<', '>', '═', '║', '╔', '╗', '╚', '╝', '├', '┤', '┬', '┴',
    '┼', '━', '│',
];

pub const FLOAT_PARTICLE_KEYFRAMES: &str = "\
@keyframes floatParticle {
    0% { transform: translateY(0) translateX(0) scale(1); opacity: 0; }
    10% { opacity: 1; }
    90% { opacity: 1; }
    100% { transform: translateY(-100vh) translateX(50px) scale(0.5); opacity: 0; }
}";

pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn sample(random: &mut impl FnMut() -> f64) -> Self {
        Self {
            left_pct: random() * 100.0,
            top_pct: random() * 100.0,
            size_px: random() * 4.0 + 2.0,
            duration_s: random() * 20.0 + 10.0,
            opacity: random() * 0.5 + 0.1,
        }
    }

    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; \
             background: linear-gradient(135deg, rgba(59, 130, 246, {o:.3}), rgba(6, 182, 212, {o:.3})); \
             border-radius: 50%; animation: floatParticle {:.2}s linear infinite; pointer-events: none;",
            self.left_pct,
            self.top_pct,
            self.size_px,
            self.size_px,
            self.duration_s,
            o = self.opacity,
        )
    }
}

pub struct BinaryColumn {
    pub text: String,
    pub left_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub font_px: f64,
}

impl BinaryColumn {
    pub fn sample(index: usize, total: usize, random: &mut impl FnMut() -> f64) -> Self {
        let glyph_count = (random() * 20.0).floor() as usize + 10;
        let text: String = (0..glyph_count)
            .map(|_| {
                let pick = (random() * RAIN_GLYPHS.len() as f64).floor() as usize;
                RAIN_GLYPHS[pick.min(RAIN_GLYPHS.len() - 1)]
            })
            .collect();

        Self {
            text,
            left_pct: index as f64 / total as f64 * 100.0,
            delay_s: random() * 10.0,
            duration_s: random() * 15.0 + 10.0,
            font_px: random() * 6.0 + 10.0,
        }
    }

    pub fn css_text(&self) -> String {
        format!(
            "left: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s; font-size: {:.2}px;",
            self.left_pct, self.delay_s, self.duration_s, self.font_px,
        )
    }
}

pub struct FlowLine {
    pub top_pct: f64,
    pub width_px: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl FlowLine {
    pub fn sample(random: &mut impl FnMut() -> f64) -> Self {
        Self {
            top_pct: random() * 80.0 + 10.0,
            width_px: random() * 200.0 + 100.0,
            delay_s: random() * 5.0,
            duration_s: random() * 3.0 + 2.0,
        }
    }

    pub fn css_text(&self) -> String {
        format!(
            "top: {:.2}%; width: {:.2}px; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.top_pct, self.width_px, self.delay_s, self.duration_s,
        )
    }
}

pub struct PipelineNode {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl PipelineNode {
    pub fn sample(random: &mut impl FnMut() -> f64) -> Self {
        Self {
            left_pct: random() * 80.0 + 10.0,
            top_pct: random() * 80.0 + 10.0,
            delay_s: random() * 2.0,
            scale: random() * 0.5 + 0.5,
            opacity: 0.3 + random() * 0.3,
        }
    }

    pub fn css_text(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; transform: scale({:.2}); opacity: {:.2};",
            self.left_pct, self.top_pct, self.delay_s, self.scale, self.opacity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cycles through a fixed spread of [0, 1) samples so every field sees
    // low, mid, and near-max draws across repeated sampling.
    fn cycling_random() -> impl FnMut() -> f64 {
        let samples = [0.0, 0.999, 0.25, 0.5, 0.75, 0.1, 0.9, 0.333];
        let mut cursor = 0;
        move || {
            let value = samples[cursor % samples.len()];
            cursor += 1;
            value
        }
    }

    #[test]
    fn particle_parameters_stay_in_range() {
        let mut random = cycling_random();
        for _ in 0..32 {
            let particle = Particle::sample(&mut random);
            assert!((0.0..100.0).contains(&particle.left_pct));
            assert!((0.0..100.0).contains(&particle.top_pct));
            assert!((2.0..6.0).contains(&particle.size_px));
            assert!((10.0..30.0).contains(&particle.duration_s));
            assert!((0.1..0.6).contains(&particle.opacity));
        }
    }

    #[test]
    fn particle_style_names_the_float_animation() {
        let mut random = cycling_random();
        let css = Particle::sample(&mut random).css_text();
        assert!(css.contains("animation: floatParticle"));
        assert!(css.contains("border-radius: 50%"));
        assert!(css.contains("pointer-events: none"));
    }

    #[test]
    fn binary_column_layout_and_glyphs() {
        let mut random = cycling_random();
        let column = BinaryColumn::sample(3, 20, &mut random);

        assert!((column.left_pct - 15.0).abs() < 1e-9);
        let glyph_count = column.text.chars().count();
        assert!((10..30).contains(&glyph_count));
        assert!(column.text.chars().all(|c| RAIN_GLYPHS.contains(&c)));
        assert!((0.0..10.0).contains(&column.delay_s));
        assert!((10.0..25.0).contains(&column.duration_s));
        assert!((10.0..16.0).contains(&column.font_px));
    }

    #[test]
    fn first_column_sits_at_left_edge() {
        let mut random = cycling_random();
        let column = BinaryColumn::sample(0, 13, &mut random);
        assert_eq!(column.left_pct, 0.0);
    }

    #[test]
    fn flow_line_parameters_stay_in_range() {
        let mut random = cycling_random();
        for _ in 0..16 {
            let line = FlowLine::sample(&mut random);
            assert!((10.0..90.0).contains(&line.top_pct));
            assert!((100.0..300.0).contains(&line.width_px));
            assert!((0.0..5.0).contains(&line.delay_s));
            assert!((2.0..5.0).contains(&line.duration_s));
        }
    }

    #[test]
    fn pipeline_node_parameters_stay_in_range() {
        let mut random = cycling_random();
        for _ in 0..16 {
            let node = PipelineNode::sample(&mut random);
            assert!((10.0..90.0).contains(&node.left_pct));
            assert!((10.0..90.0).contains(&node.top_pct));
            assert!((0.0..2.0).contains(&node.delay_s));
            assert!((0.5..1.0).contains(&node.scale));
            assert!((0.3..0.6).contains(&node.opacity));
        }
    }

    #[test]
    fn keyframes_cover_drift_and_fade() {
        assert!(FLOAT_PARTICLE_KEYFRAMES.contains("@keyframes floatParticle"));
        assert!(FLOAT_PARTICLE_KEYFRAMES.contains("translateY(-100vh)"));
    }
}
