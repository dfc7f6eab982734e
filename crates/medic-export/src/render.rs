use tera::{Context, Tera};

use crate::error::ExportError;
use crate::note::DispositionNote;

pub const DEFAULT_TEMPLATE_NAME: &str = "disposition_note";

/// Plain-text note used when no custom template is configured.
pub const DEFAULT_TEMPLATE: &str = "\
{{ protocol_code }} {{ protocol_title }}
Generated {{ generated_at }}

Decision points:
{% for a in answers %}  [{{ a.answer }}] {{ a.label }}
{% endfor %}
{%- if threshold_count is defined %}Criteria met: {{ threshold_count }}
{% endif %}
{%- if subquestion is defined %}Follow-up: {{ subquestion }}
{% endif %}
{%- if disposition is defined %}
Disposition: {{ disposition.label }}
{% for line in disposition.text %}  {{ line }}
{% endfor %}
{%- elif awaiting_screening %}
Disposition: pending screening confirmation
{% else %}
Disposition: none available
{% endif %}";

/// Render a Tera template with a [`DispositionNote`].
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The note's fields become the template context variables.
pub fn render_note(
    template_name: &str,
    template_content: &str,
    note: &DispositionNote,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(note)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, protocol = %note.protocol_code, "rendered note");
    Ok(rendered)
}

pub fn render_default(note: &DispositionNote) -> Result<String, ExportError> {
    render_note(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, note)
}
