//! Server-rendered HTML for the prompt form.

use pulldown_cmark::{html, Event, Options, Parser};

/// What the page shows below the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Empty,
    /// Inline validation message; no request was made
    Notice(String),
    /// Critique text (output or `Error: ...`) to render as Markdown
    Result(String),
}

const TIPS: &str = r#"**Be Clear and Specific:**
- Tell the AI exactly what you want
- Avoid confusing or contradictory instructions
- Give clear examples when possible
- Set boundaries for what to include
- Give enough background information

**Match Complexity to Task:**
- Simple tasks = brief prompts
- Complex tasks = more detailed prompts
- Set clear limits on how much work to do
- Don't overcomplicate simple requests

**Control the Output:**
- Specify how detailed you want the answer
- Ask for the format you prefer (list, paragraph, etc.)
- Tell the AI how much to explain its thinking"#;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1200px; padding: 1.5rem; color: #1f2933; }
.columns { display: flex; gap: 2rem; flex-wrap: wrap; }
.columns > section { flex: 1 1 420px; min-width: 0; }
textarea { width: 100%; height: 300px; font: inherit; padding: .6rem; box-sizing: border-box; }
button { width: 100%; margin-top: .8rem; padding: .6rem 1rem; border: none; border-radius: 8px; background: #ff4b4b; color: #fff; font-size: 1rem; cursor: pointer; }
button[disabled] { opacity: .6; cursor: progress; }
.notice { background: #fdecea; color: #8a1c1c; padding: .6rem .8rem; border-radius: 6px; }
.result { border-left: 3px solid #0074ff; padding-left: 1rem; }
#loading { display: none; color: #52606d; }
footer { margin-top: 2rem; color: #7b8794; font-style: italic; }
"#;

const SCRIPT: &str = r#"
document.getElementById('critique-form').addEventListener('submit', function () {
  var button = this.querySelector('button');
  button.disabled = true;
  button.textContent = 'Analyzing your prompt...';
  document.getElementById('loading').style.display = 'block';
});
"#;

/// Escape text for use inside HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render Markdown to HTML. Raw HTML in the source is shown as text.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Render the whole page. `prompt` is echoed back into the textarea.
pub fn render_page(prompt: &str, panel: &Panel) -> String {
    let panel_html = match panel {
        Panel::Empty => String::new(),
        Panel::Notice(message) => format!(r#"<p class="notice">{}</p>"#, escape_html(message)),
        Panel::Result(text) => format!(
            r#"<h2>Analysis &amp; Improvement</h2>
<div class="result">{}</div>"#,
            render_markdown(text)
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>AI Prompt Optimizer</title>
<style>{style}</style>
</head>
<body>
<h1>AI Prompt Helper</h1>
<p>Make your AI prompts clearer and more effective! Works with GPT-5, Claude, Gemini, and other AI models. Enter a prompt and click 'Analyze &amp; Improve' to see results here!</p>
<details>
<summary>Click to see tips for better prompts</summary>
{tips}
</details>
<div class="columns">
<section>
<h2>Input Prompt</h2>
<form id="critique-form" method="post" action="/">
<label for="prompt">Enter your prompt here:</label>
<textarea id="prompt" name="prompt" placeholder="Paste your prompt here and I'll help make it better...">{prompt}</textarea>
<button type="submit">Analyze &amp; Improve</button>
</form>
<p id="loading">Analyzing your prompt...</p>
</section>
<section>
{panel}
</section>
</div>
<footer>Powered by promptsmith</footer>
<script>{script}</script>
</body>
</html>
"#,
        style = STYLE,
        tips = render_markdown(TIPS),
        prompt = escape_html(prompt),
        panel = panel_html,
        script = SCRIPT,
    )
}
