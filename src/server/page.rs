//! HTML rendering of the [`PageLayout`].
//!
//! Controls are rendered server side; the inline script registers one change
//! handler per control, and each handler asks the matching chart endpoint for
//! a fresh [`ChartSpec`](crate::chart::ChartSpec) and hands it to plotly.js.

use crate::layout::PageLayout;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 24px; }
h1 { text-align: center; color: #503D36; font-size: 40px; }
select { min-width: 320px; padding: 4px; }
.slider { display: flex; gap: 12px; align-items: center; }
.slider input { flex: 1; }
.marks { display: flex; justify-content: space-between; color: #666; font-size: 12px; }
.error { color: #b00020; }
"#;

const SCRIPT: &str = r#"
(() => {
  const site = document.getElementById('site-dropdown');
  const slider = document.getElementById('payload-slider');
  const low = document.getElementById('payload-slider-low');
  const high = document.getElementById('payload-slider-high');
  const readout = document.getElementById('output-container-range-slider');
  const pieOut = document.getElementById(slider.dataset.pieOutput);
  const scatterOut = document.getElementById(slider.dataset.scatterOutput);

  const controls = {
    site: site.value,
    low: Number(slider.dataset.low),
    high: Number(slider.dataset.high),
  };

  const handlers = {};
  const subscribe = (event, handler) => (handlers[event] ||= []).push(handler);
  const publish = (event) => (handlers[event] || []).forEach((h) => h({ ...controls }));

  const fetchSpec = (path, params) =>
    fetch(path + '?' + new URLSearchParams(params)).then((resp) =>
      resp.ok ? resp.json() : resp.text().then((msg) => Promise.reject(new Error(msg))),
    );

  const draw = (target, spec) => {
    let traces;
    const layout = { title: { text: spec.title } };
    if (spec.kind === 'pie') {
      traces = [{
        type: 'pie',
        labels: spec.slices.map((s) => s.label),
        values: spec.slices.map((s) => s.value),
      }];
    } else {
      traces = spec.series.map((s) => ({
        type: 'scatter',
        mode: 'markers',
        name: s.name,
        marker: { color: s.color },
        x: s.points.map((p) => p.payload_mass_kg),
        y: s.points.map((p) => p.class),
        text: s.points.map((p) => p.launch_site),
      }));
      layout.xaxis = { title: { text: spec.x_title } };
      layout.yaxis = { title: { text: spec.y_title } };
    }
    Plotly.react(target, traces, layout);
  };

  const fail = (target) => (err) => {
    target.innerHTML = '';
    const p = document.createElement('p');
    p.className = 'error';
    p.textContent = 'Error rendering chart: ' + err.message;
    target.appendChild(p);
  };

  const renderPie = (c) =>
    fetchSpec('/api/success-pie', { site: c.site })
      .then((spec) => draw(pieOut, spec))
      .catch(fail(pieOut));

  const renderScatter = (c) =>
    fetchSpec('/api/payload-scatter', { site: c.site, low: c.low, high: c.high })
      .then((spec) => draw(scatterOut, spec))
      .catch(fail(scatterOut));

  const renderReadout = (c) => {
    readout.textContent = 'Selected payload: ' + c.low + ' to ' + c.high + ' kg';
  };

  subscribe('site', renderPie);
  subscribe('site', renderScatter);
  subscribe('payload', renderScatter);
  subscribe('payload', renderReadout);

  site.addEventListener('change', () => {
    controls.site = site.value;
    publish('site');
  });
  for (const input of [low, high]) {
    input.addEventListener('change', () => {
      const a = Number(low.value);
      const b = Number(high.value);
      controls.low = Math.min(a, b);
      controls.high = Math.max(a, b);
      publish('payload');
    });
  }

  publish('site');
  renderReadout(controls);
})();
"#;

/// Render the full dashboard page.
pub fn render(layout: &PageLayout) -> String {
    let dropdown = &layout.site_dropdown;
    let slider = &layout.payload_slider;
    let title = escape(&layout.heading);
    let slider_id = escape(&slider.id);
    let pie_id = escape(&layout.pie_output_id);
    let scatter_id = escape(&layout.scatter_output_id);
    let [low, high] = slider.value;

    let mut html = String::with_capacity(8 * 1024);
    html.push_str(&format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <script src=\"{PLOTLY_CDN}\"></script>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n"
    ));

    html.push_str(&format!(
        "<select id=\"{}\" title=\"{}\">\n",
        escape(&dropdown.id),
        escape(&dropdown.placeholder),
    ));
    for option in &dropdown.options {
        let selected = if option.value == dropdown.value { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>\n",
            escape(&option.value),
            escape(&option.label),
        ));
    }
    html.push_str("</select>\n<br>\n");

    html.push_str(&format!(
        "<div id=\"{pie_id}\"></div>\n<br>\n<p>{label}</p>\n\
         <div id=\"{slider_id}\" class=\"slider\" data-low=\"{low}\" data-high=\"{high}\" \
         data-pie-output=\"{pie_id}\" data-scatter-output=\"{scatter_id}\">\n",
        label = escape(&slider.label),
    ));
    // The browser snaps each thumb to the nearest step; the exact bounds
    // travel in `data-low` / `data-high` for the first render.
    for (suffix, value) in [("low", low), ("high", high)] {
        html.push_str(&format!(
            "<input type=\"range\" id=\"{slider_id}-{suffix}\" min=\"{}\" max=\"{}\" step=\"{}\" value=\"{value}\">\n",
            slider.min, slider.max, slider.step,
        ));
    }
    html.push_str("</div>\n<div class=\"marks\">");
    for mark in &slider.marks {
        html.push_str(&format!("<span>{mark}</span>"));
    }
    html.push_str("</div>\n<div id=\"output-container-range-slider\"></div>\n");

    html.push_str(&format!(
        "<div id=\"{scatter_id}\"></div>\n<script>{SCRIPT}</script>\n</body>\n</html>\n"
    ));

    html
}

/// Minimal escaping for text and attribute values.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
