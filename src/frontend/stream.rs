use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement};

use crate::anim;
use crate::decor::{
    BinaryColumn, FlowLine, Particle, PipelineNode, FLOAT_PARTICLE_KEYFRAMES, FLOW_LINE_COUNT,
    PARTICLE_COUNT, PIPELINE_NODE_COUNT,
};

const FLOAT_KEYFRAMES_STYLE_ID: &str = "float-particle-keyframes";

fn stream_container(document: &Document) -> Option<HtmlElement> {
    document
        .get_element_by_id("data-stream")?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn js_random() -> impl FnMut() -> f64 {
    || js_sys::Math::random()
}

fn append_styled(
    document: &Document,
    container: &Element,
    class_name: &str,
    css_text: &str,
    text: Option<&str>,
) {
    let Ok(element) = document.create_element("div") else {
        return;
    };
    element.set_class_name(class_name);
    if let Some(text) = text {
        element.set_text_content(Some(text));
    }
    if let Some(styled) = element.dyn_ref::<HtmlElement>() {
        styled.style().set_css_text(css_text);
    }
    let _ = container.append_child(&element);
}

pub fn init_particles(document: &Document) {
    let Some(container) = stream_container(document) else {
        return;
    };
    inject_float_keyframes(document);

    let mut random = js_random();
    for _ in 0..PARTICLE_COUNT {
        let particle = Particle::sample(&mut random);
        append_styled(document, &container, "particle", &particle.css_text(), None);
    }
}

fn inject_float_keyframes(document: &Document) {
    if document.get_element_by_id(FLOAT_KEYFRAMES_STYLE_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(FLOAT_KEYFRAMES_STYLE_ID);
    style.set_text_content(Some(FLOAT_PARTICLE_KEYFRAMES));
    let _ = head.append_child(&style);
}

// Column count is derived from the viewport width once, here; the rain is
// not re-laid-out on later resizes.
pub fn init_binary_rain(document: &Document) {
    let Some(container) = stream_container(document) else {
        return;
    };
    let Ok(rain) = document.create_element("div") else {
        return;
    };
    rain.set_class_name("binary-rain");
    if container.append_child(&rain).is_err() {
        return;
    }

    let viewport_width = window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let total = anim::rain_column_count(viewport_width);

    let mut random = js_random();
    for index in 0..total {
        let column = BinaryColumn::sample(index, total, &mut random);
        append_styled(
            document,
            &rain,
            "binary-column",
            &column.css_text(),
            Some(&column.text),
        );
    }
}

pub fn init_flow_lines(document: &Document) {
    let Some(container) = stream_container(document) else {
        return;
    };

    let mut random = js_random();
    for _ in 0..FLOW_LINE_COUNT {
        let line = FlowLine::sample(&mut random);
        append_styled(document, &container, "data-flow-line", &line.css_text(), None);
    }
}

pub fn init_pipeline_nodes(document: &Document) {
    let Some(container) = stream_container(document) else {
        return;
    };

    let mut random = js_random();
    for _ in 0..PIPELINE_NODE_COUNT {
        let node = PipelineNode::sample(&mut random);
        append_styled(document, &container, "pipeline-node", &node.css_text(), None);
    }
}
