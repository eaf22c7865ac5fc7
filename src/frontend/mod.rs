mod nav;
mod observe;
mod stream;
mod typing;

use web_sys::{window, MouseEvent};
use yew::prelude::*;

const CONSOLE_BANNER: &str = "> Pipeline Status: OPERATIONAL\n> Data Integrity: 99.9%\n> Welcome to my portfolio!";

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };

    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

// Fixed startup order: navigation, typing, reveals, skill bars, background
// decorations, counters, pipeline nodes. Every initializer is a no-op when
// its target elements are missing.
fn init_page() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let reduced_motion = prefers_reduced_motion();

    nav::init(&document);
    typing::init(&document, reduced_motion);
    observe::init_reveals(&document);
    observe::init_skill_bars(&document);
    if !reduced_motion {
        stream::init_particles(&document);
        stream::init_binary_rain(&document);
        stream::init_flow_lines(&document);
    }
    observe::init_counters(&document);
    if !reduced_motion {
        stream::init_pipeline_nodes(&document);
    }

    web_sys::console::log_1(&CONSOLE_BANNER.into());
}

#[derive(Properties, PartialEq)]
struct SkillProps {
    name: AttrValue,
    progress: AttrValue,
}

#[function_component(Skill)]
fn skill(props: &SkillProps) -> Html {
    html! {
        <div class="skill-item" data-aos="fade-up">
            <div class="skill-header">
                <span class="skill-name">{props.name.clone()}</span>
                <span class="skill-percent">{format!("{}%", props.progress)}</span>
            </div>
            <div class="skill-bar">
                <div class="skill-progress" data-progress={props.progress.clone()}></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HighlightProps {
    count: AttrValue,
    #[prop_or_default]
    suffix: AttrValue,
    #[prop_or_default]
    decimal: bool,
    label: AttrValue,
}

#[function_component(Highlight)]
fn highlight(props: &HighlightProps) -> Html {
    html! {
        <div class="highlight-card" data-aos="fade-up">
            <span
                class="highlight-number"
                data-count={props.count.clone()}
                data-suffix={props.suffix.clone()}
                data-decimal={props.decimal.to_string()}
            >
                {"0"}
            </span>
            <span class="highlight-label">{props.label.clone()}</span>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let menu_open = use_state(|| false);

    {
        use_effect_with((), move |_| {
            init_page();
            || ()
        });
    }

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*menu_open;
            set_body_scroll_locked(next);
            menu_open.set(next);
        })
    };

    let on_nav_link = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            set_body_scroll_locked(false);
            menu_open.set(false);
        })
    };

    let nav_link = |href: &'static str, label: &'static str| {
        html! {
            <li>
                <a class="nav-link" href={href} onclick={on_nav_link.clone()}>{label}</a>
            </li>
        }
    };

    html! {
        <>
            <nav id="navbar" class="navbar">
                <div class="nav-inner">
                    <a class="nav-logo" href="#home">{"aarav@pipeline:~$"}</a>
                    <button
                        id="nav-toggle"
                        type="button"
                        class={classes!("nav-toggle", menu_open.then_some("active"))}
                        aria-label="Toggle navigation menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={on_toggle_menu}
                    >
                        <span class="nav-toggle-bar"></span>
                        <span class="nav-toggle-bar"></span>
                        <span class="nav-toggle-bar"></span>
                    </button>
                    <ul id="nav-menu" class={classes!("nav-menu", menu_open.then_some("active"))}>
                        {nav_link("#home", "Home")}
                        {nav_link("#about", "About")}
                        {nav_link("#skills", "Skills")}
                        {nav_link("#projects", "Projects")}
                        {nav_link("#contact", "Contact")}
                    </ul>
                </div>
            </nav>

            <section id="home" class="hero">
                <div id="data-stream" class="data-stream" aria-hidden="true"></div>
                <div class="hero-content">
                    <p class="hero-greeting">{"Hi, I'm"}</p>
                    <h1 class="hero-name">{"Aarav Shah"}</h1>
                    <p class="hero-title">
                        <span id="typed-title" class="typed-title"></span>
                        <span class="typed-cursor" aria-hidden="true">{"|"}</span>
                    </p>
                    <p class="hero-subtitle">
                        {"I build resilient data pipelines that turn raw events into decisions."}
                    </p>
                    <div class="hero-actions">
                        <a class="button primary" href="#projects">{"View Work"}</a>
                        <a class="button ghost" href="#contact">{"Get in Touch"}</a>
                    </div>
                </div>
            </section>

            <section id="about" class="section about">
                <h2 class="section-heading" data-aos="fade-up">{"About"}</h2>
                <p class="section-copy" data-aos="fade-up">
                    {"Data engineer focused on high-volume batch and streaming pipelines: \
                      PySpark jobs on AWS Glue, orchestration with Airflow, and warehouse \
                      modeling in Redshift. I care about reliability first and query \
                      latency second."}
                </p>
                <div class="highlight-grid">
                    <Highlight count="3" suffix="+" label="Years of experience" />
                    <Highlight count="300" suffix="M+" label="Rows processed" />
                    <Highlight count="99.9" suffix="%" decimal=true label="Pipeline reliability" />
                    <Highlight count="850000" suffix="+" label="Events ingested daily" />
                </div>
            </section>

            <section id="skills" class="section skills">
                <h2 class="section-heading" data-aos="fade-up">{"Skills"}</h2>
                <div class="skill-grid">
                    <Skill name="PySpark" progress="95" />
                    <Skill name="SQL" progress="90" />
                    <Skill name="AWS Glue" progress="88" />
                    <Skill name="Airflow" progress="85" />
                    <Skill name="Redshift" progress="82" />
                    <Skill name="Kafka" progress="78" />
                </div>
            </section>

            <section id="projects" class="section projects">
                <h2 class="section-heading" data-aos="fade-up">{"Projects"}</h2>
                <div class="project-grid">
                    <article class="project-card" data-aos="fade-up">
                        <h3>{"Clickstream Lakehouse"}</h3>
                        <p>
                            {"Kafka-to-S3 ingestion with hourly PySpark compaction; \
                              300M+ rows a day landing as query-ready Parquet."}
                        </p>
                        <ul class="project-tags">
                            <li>{"Kafka"}</li>
                            <li>{"PySpark"}</li>
                            <li>{"S3"}</li>
                        </ul>
                    </article>
                    <article class="project-card" data-aos="fade-up">
                        <h3>{"Warehouse Reliability Suite"}</h3>
                        <p>
                            {"Airflow DAG health checks and data-quality gates that \
                              took pipeline reliability from 97.1% to 99.9%."}
                        </p>
                        <ul class="project-tags">
                            <li>{"Airflow"}</li>
                            <li>{"Redshift"}</li>
                            <li>{"dbt"}</li>
                        </ul>
                    </article>
                    <article class="project-card" data-aos="fade-up">
                        <h3>{"Glue Cost Optimizer"}</h3>
                        <p>
                            {"Job-level DPU right-sizing from CloudWatch metrics; \
                              cut monthly Glue spend by a third."}
                        </p>
                        <ul class="project-tags">
                            <li>{"AWS Glue"}</li>
                            <li>{"CloudWatch"}</li>
                            <li>{"Python"}</li>
                        </ul>
                    </article>
                </div>
            </section>

            <section id="contact" class="section contact">
                <h2 class="section-heading" data-aos="fade-up">{"Contact"}</h2>
                <p class="section-copy" data-aos="fade-up">
                    {"Open to data platform roles and interesting pipeline problems."}
                </p>
                <div class="contact-links" data-aos="fade-up">
                    <a class="button primary" href="mailto:aarav@example.com">{"Email"}</a>
                    <a class="button ghost" href="https://github.com/aaravshah" target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                    <a class="button ghost" href="https://www.linkedin.com/in/aaravshah" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                </div>
            </section>

            <footer class="footer">
                <p>{"Built with Rust + WebAssembly. No trackers, just pipelines."}</p>
            </footer>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
