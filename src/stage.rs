use crate::constants::*;
use crate::dom;
use letter_core::{SealPose, SkyTone, StageCommand};
use web_sys as web;

#[inline]
fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

#[inline]
fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
fn seal_transform(pose: SealPose) -> String {
    if pose == SealPose::NEUTRAL {
        return "translate(-50%, -50%)".to_string();
    }
    format!(
        "translate(-50%, -50%) rotate({:.2}deg) translateX({:.2}px)",
        pose.rotate_deg, pose.shift_px
    )
}

/// Element handles for every surface the controller can change.
pub struct DomStage {
    intro: web::HtmlElement,
    loader_bar: web::HtmlElement,
    envelope: web::HtmlElement,
    seal: web::HtmlElement,
    hint: web::HtmlElement,
    desk: web::HtmlElement,
    letter_stage: web::HtmlElement,
    letter: web::HtmlElement,
    outro: web::HtmlElement,
    sunlight: web::HtmlElement,
    stars: web::HtmlElement,
    lines: Vec<web::Element>,
}

impl DomStage {
    pub fn bind(document: &web::Document) -> anyhow::Result<Self> {
        let lines = dom::query_all(document, LINE_SELECTOR)?;
        if lines.is_empty() {
            anyhow::bail!("no letter lines match {}", LINE_SELECTOR);
        }
        Ok(Self {
            intro: dom::required_element(document, INTRO_ID)?,
            loader_bar: dom::required_element(document, LOADER_BAR_ID)?,
            envelope: dom::required_element(document, ENVELOPE_ID)?,
            seal: dom::required_element(document, SEAL_ID)?,
            hint: dom::required_element(document, HINT_ID)?,
            desk: dom::required_element(document, DESK_STAGE_ID)?,
            letter_stage: dom::required_element(document, LETTER_STAGE_ID)?,
            letter: dom::required_element(document, LETTER_ID)?,
            outro: dom::required_element(document, OUTRO_ID)?,
            sunlight: dom::required_element(document, SUNLIGHT_ID)?,
            stars: dom::required_element(document, STARS_CANVAS_ID)?,
            lines,
        })
    }

    pub fn seal(&self) -> &web::HtmlElement {
        &self.seal
    }

    /// The authored letter text, one entry per line element.
    pub fn line_texts(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|el| el.text_content().unwrap_or_default().trim().to_string())
            .collect()
    }

    pub fn apply(&self, command: &StageCommand) {
        match command {
            StageCommand::IntroVisible(on) => set_class(&self.intro, CLASS_ACTIVE, *on),
            StageCommand::LoaderProgress(p) => {
                set_style(&self.loader_bar, "width", &format!("{:.0}%", p))
            }
            StageCommand::Hint(text) => self.hint.set_text_content(Some(text.as_str())),
            StageCommand::Progress(p) => {
                _ = self.seal.set_attribute("aria-valuenow", &format!("{:.0}", p));
            }
            StageCommand::SealPose(pose) => set_style(&self.seal, "transform", &seal_transform(*pose)),
            StageCommand::SealDragging(on) => set_class(&self.seal, CLASS_DRAGGING, *on),
            StageCommand::SealCracked(on) => set_class(&self.seal, CLASS_CRACKED, *on),
            StageCommand::EnvelopeOpen(on) => set_class(&self.envelope, CLASS_ENVELOPE_OPEN, *on),
            StageCommand::DaySceneVisible(on) => {
                if *on {
                    _ = self.desk.style().remove_property("opacity");
                    _ = self.desk.style().remove_property("pointer-events");
                } else {
                    set_style(&self.desk, "opacity", DESK_HIDDEN_OPACITY);
                    set_style(&self.desk, "pointer-events", "none");
                }
            }
            StageCommand::Sky(tone) => {
                let gradient = match tone {
                    SkyTone::Day => SKY_DAY_GRADIENT,
                    SkyTone::Night => SKY_NIGHT_GRADIENT,
                };
                set_style(&self.sunlight, "background", gradient);
            }
            StageCommand::ParticlesVisible(on) => {
                set_style(
                    &self.stars,
                    "opacity",
                    if *on { PARTICLES_SHOWN_OPACITY } else { "0" },
                );
            }
            StageCommand::LetterStageActive(on) => {
                set_class(&self.letter_stage, CLASS_ACTIVE, *on);
                _ = self
                    .letter_stage
                    .set_attribute("aria-hidden", if *on { "false" } else { "true" });
            }
            StageCommand::LetterFolded(on) => set_class(&self.letter, CLASS_FOLDED, *on),
            StageCommand::LineText { index, text } => {
                if let Some(el) = self.lines.get(*index) {
                    el.set_text_content(Some(text.as_str()));
                    set_class(el, CLASS_VISIBLE, !text.is_empty());
                }
            }
            StageCommand::ScrollToLine(index) => {
                if let Some(el) = self.lines.get(*index) {
                    let opts = web::ScrollIntoViewOptions::new();
                    opts.set_behavior(web::ScrollBehavior::Smooth);
                    opts.set_block(web::ScrollLogicalPosition::Center);
                    el.scroll_into_view_with_scroll_into_view_options(&opts);
                }
            }
            StageCommand::OutroVisible(on) => set_class(&self.outro, CLASS_ACTIVE, *on),
            StageCommand::Vibrate(ms) => {
                if let Some(w) = web::window() {
                    _ = w.navigator().vibrate_with_duration(*ms);
                }
            }
        }
    }
}
