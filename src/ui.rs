pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Shipping Rate Dashboard</title>
  <style>
    :root {
      --bg-1: #0f1b2d;
      --bg-2: #16273f;
      --ink: #e8eef7;
      --muted: #8fa3bd;
      --accent: #4fa3ff;
      --card: #16273f;
      --line: rgba(143, 163, 189, 0.2);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg-1), #0a1220 70%);
      color: var(--ink);
      font-family: "Segoe UI", "Apple SD Gothic Neo", "Malgun Gothic", sans-serif;
      padding: 24px 20px 40px;
    }

    .wrap {
      width: min(1180px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 20px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: baseline;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: 1.6rem;
      letter-spacing: 0.02em;
    }

    .generated {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .clocks {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
    }

    .clock {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 8px 14px;
      min-width: 130px;
    }

    .clock .city {
      color: var(--muted);
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
    }

    .clock .time {
      font-size: 1.1rem;
      font-variant-numeric: tabular-nums;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 18px;
    }

    .info-deck {
      display: grid;
      gap: 16px;
    }

    .info-slide {
      display: none;
    }

    .info-slide.active {
      display: block;
    }

    .panel-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 10px;
      margin-top: 10px;
    }

    .panel-stat .label {
      color: var(--muted);
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      display: block;
    }

    .panel-stat .value {
      font-size: 1.2rem;
    }

    .forecast {
      display: flex;
      gap: 10px;
      overflow-x: auto;
      margin-top: 12px;
    }

    .forecast .day {
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 8px 10px;
      min-width: 96px;
      text-align: center;
      font-size: 0.85rem;
    }

    .chart-deck h2 {
      margin: 0 0 6px;
      font-size: 1.15rem;
    }

    .chart-slide {
      display: none;
    }

    .chart-slide.active {
      display: block;
    }

    .chart-box svg {
      width: 100%;
      height: 300px;
      display: block;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      margin: 8px 0 12px;
      font-size: 0.82rem;
      color: var(--muted);
    }

    .legend .swatch {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 2px;
      margin-right: 5px;
    }

    .axis-label {
      fill: var(--muted);
      font-size: 10px;
    }

    .grid-line {
      stroke: var(--line);
    }

    table.index-table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.85rem;
    }

    table.index-table th,
    table.index-table td {
      border-bottom: 1px solid var(--line);
      padding: 6px 8px;
      text-align: right;
    }

    table.index-table th:first-child,
    table.index-table td:first-child {
      text-align: left;
    }

    table.index-table th {
      color: var(--muted);
      font-weight: 600;
    }

    .text-red-500 { color: #f87171; }
    .text-blue-500 { color: #60a5fa; }
    .text-gray-700 { color: var(--muted); }

    .no-data,
    .placeholder,
    .fetch-error {
      color: var(--muted);
      text-align: center;
      padding: 28px 0;
    }

    .fetch-error {
      color: #f87171;
    }

    .dots {
      display: flex;
      justify-content: center;
      gap: 6px;
      margin-top: 10px;
    }

    .dots span {
      width: 7px;
      height: 7px;
      border-radius: 50%;
      background: var(--line);
    }

    .dots span.on {
      background: var(--accent);
    }
  </style>
</head>
<body>
  <div class="wrap">
    <header>
      <h1>Shipping Rate Dashboard</h1>
      <span class="generated" id="generated"></span>
    </header>

    <div class="clocks" id="clocks"></div>

    <section class="card info-deck" id="info-deck">
      <div class="placeholder">Loading…</div>
    </section>

    <section class="card chart-deck" id="chart-deck">
      <div class="placeholder">Loading…</div>
    </section>
  </div>

  <script>
    const infoDeck = document.getElementById('info-deck');
    const chartDeck = document.getElementById('chart-deck');
    const clocksEl = document.getElementById('clocks');
    const generatedEl = document.getElementById('generated');

    const INFO_ROTATE_MS = 5000;
    const CHART_ROTATE_MS = 8000;

    let clocks = [];

    const tickClocks = () => {
      const now = new Date();
      clocksEl.querySelectorAll('.clock').forEach((el) => {
        const zone = el.dataset.zone;
        el.querySelector('.time').textContent = now.toLocaleTimeString('en-GB', {
          timeZone: zone,
          hour12: false
        });
      });
    };

    const renderClocks = () => {
      clocksEl.innerHTML = clocks
        .map((clock) => `
          <div class="clock" data-zone="${clock.zone}">
            <span class="city">${clock.city}</span>
            <span class="time">--:--:--</span>
          </div>`)
        .join('');
      tickClocks();
    };

    const fmt = (value, decimals = 1) =>
      value === null || value === undefined ? '-' : Number(value).toFixed(decimals);

    const chartBounds = (spec) => {
      let minX = Infinity, maxX = -Infinity, minY = Infinity, maxY = -Infinity;
      spec.datasets.forEach((ds) => {
        ds.points.forEach((p) => {
          const t = Date.parse(p.x);
          if (t < minX) minX = t;
          if (t > maxX) maxX = t;
          if (p.y < minY) minY = p.y;
          if (p.y > maxY) maxY = p.y;
        });
      });
      if (spec.options?.scales?.y?.beginAtZero && minY > 0) minY = 0;
      if (minY === maxY) { minY -= 1; maxY += 1; }
      if (minX === maxX) { minX -= 86400000; maxX += 86400000; }
      return { minX, maxX, minY, maxY };
    };

    const renderChart = (svg, spec) => {
      const width = 1080;
      const height = 300;
      const padX = 56;
      const padY = 30;
      svg.setAttribute('viewBox', `0 0 ${width} ${height}`);

      const { minX, maxX, minY, maxY } = chartBounds(spec);
      const x = (t) => padX + ((t - minX) / (maxX - minX)) * (width - padX * 2);
      const y = (v) => height - padY - ((v - minY) / (maxY - minY)) * (height - padY * 2);

      const ticks = (spec.options?.scales?.y?.ticks?.maxTicksLimit ?? 6) - 1;
      let parts = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = minY + ((maxY - minY) * i) / ticks;
        const yPos = y(value);
        parts += `<line class="grid-line" x1="${padX}" y1="${yPos}" x2="${width - padX}" y2="${yPos}" />`;
        parts += `<text class="axis-label" x="${padX - 8}" y="${yPos + 3}" text-anchor="end">${Math.round(value)}</text>`;
      }

      const monthly = spec.options?.scales?.x?.time?.unit === 'month';
      const labelFor = (t) => {
        const d = new Date(t);
        return monthly
          ? `${d.getUTCFullYear()}-${String(d.getUTCMonth() + 1).padStart(2, '0')}`
          : d.toISOString().slice(5, 10);
      };
      const labelCount = 6;
      for (let i = 0; i <= labelCount; i += 1) {
        const t = minX + ((maxX - minX) * i) / labelCount;
        parts += `<text class="axis-label" x="${x(t)}" y="${height - padY + 16}" text-anchor="middle">${labelFor(t)}</text>`;
      }

      if (spec.kind === 'bar') {
        const slot = (width - padX * 2) / 14;
        const barWidth = Math.max(2, slot / (spec.datasets.length + 1));
        spec.datasets.forEach((ds, di) => {
          ds.points.forEach((p) => {
            const cx = x(Date.parse(p.x)) + (di - spec.datasets.length / 2) * barWidth;
            const top = y(p.y);
            const base = y(Math.max(minY, 0));
            parts += `<rect x="${cx}" y="${Math.min(top, base)}" width="${barWidth}"
              height="${Math.abs(base - top)}" fill="${ds.color}" stroke="${ds.border_color}" />`;
          });
        });
      } else {
        spec.datasets.forEach((ds) => {
          const path = ds.points
            .map((p, i) => `${i === 0 ? 'M' : 'L'} ${x(Date.parse(p.x)).toFixed(1)} ${y(p.y).toFixed(1)}`)
            .join(' ');
          parts += `<path d="${path}" fill="none" stroke="${ds.border_color}" stroke-width="${ds.border_width}" />`;
        });
      }

      svg.innerHTML = parts;
    };

    const legendFor = (spec) =>
      `<div class="legend">${spec.datasets
        .map((ds) => `<span><span class="swatch" style="background:${ds.border_color}"></span>${ds.label}</span>`)
        .join('')}</div>`;

    const renderChartSlides = (sections) => {
      chartDeck.innerHTML = sections
        .map((section, i) => {
          let body;
          if (section.placeholder) {
            body = `<div class="placeholder">${section.placeholder}</div>`;
          } else if (!section.chart) {
            body = `<div class="no-data">No chart data</div>`;
          } else {
            body = `${legendFor(section.chart)}<div class="chart-box"><svg id="${section.chart_mount}"></svg></div>`;
          }
          return `
            <div class="chart-slide${i === 0 ? ' active' : ''}">
              <h2>${section.title}</h2>
              ${body}
              <div id="${section.table_mount}">${section.table_html}</div>
            </div>`;
        })
        .join('') + `<div class="dots">${sections.map((_, i) => `<span${i === 0 ? ' class="on"' : ''}></span>`).join('')}</div>`;

      sections.forEach((section) => {
        if (section.chart) {
          renderChart(document.getElementById(section.chart_mount), section.chart);
        }
      });
    };

    const weatherSlide = (weather) => {
      if (!weather) {
        return `<div class="info-slide"><h2>Los Angeles Weather</h2><div class="no-data">No data available</div></div>`;
      }
      const c = weather.current;
      const forecast = (weather.forecast || [])
        .map((d) => `<div class="day"><div>${d.date}</div><div>${fmt(d.min_temp, 0)}° / ${fmt(d.max_temp, 0)}°</div><div>${d.status ?? '-'}</div></div>`)
        .join('');
      return `
        <div class="info-slide">
          <h2>Los Angeles Weather — ${c.status ?? '-'}</h2>
          <div class="panel-grid">
            <div class="panel-stat"><span class="label">Temperature</span><span class="value">${fmt(c.temperature)} °C</span></div>
            <div class="panel-stat"><span class="label">Humidity</span><span class="value">${fmt(c.humidity, 0)} %</span></div>
            <div class="panel-stat"><span class="label">Wind</span><span class="value">${fmt(c.wind_speed)} m/s</span></div>
            <div class="panel-stat"><span class="label">Pressure</span><span class="value">${fmt(c.pressure, 0)} hPa</span></div>
            <div class="panel-stat"><span class="label">Sunrise</span><span class="value">${c.sunrise ?? '-'}</span></div>
            <div class="panel-stat"><span class="label">Sunset</span><span class="value">${c.sunset ?? '-'}</span></div>
          </div>
          <div class="forecast">${forecast}</div>
        </div>`;
    };

    const exchangeSlide = (exchange) => {
      const chart = exchange.chart
        ? `<div class="chart-box"><svg id="${exchange.chart_mount}"></svg></div>`
        : `<div class="no-data">No data available</div>`;
      return `
        <div class="info-slide">
          <h2>USD/KRW Exchange Rate</h2>
          <div class="panel-grid">
            <div class="panel-stat"><span class="label">Latest</span><span class="value">${fmt(exchange.latest, 2)}</span></div>
            <div class="panel-stat"><span class="label">Change</span><span class="value">${fmt(exchange.change, 2)}</span></div>
          </div>
          ${chart}
        </div>`;
    };

    const renderInfoSlides = (view) => {
      infoDeck.innerHTML = weatherSlide(view.weather) + exchangeSlide(view.exchange);
      infoDeck.querySelector('.info-slide').classList.add('active');
      if (view.exchange.chart) {
        renderChart(document.getElementById(view.exchange.chart_mount), view.exchange.chart);
      }
    };

    const rotate = (container, selector) => {
      const slides = Array.from(container.querySelectorAll(selector));
      if (slides.length < 2) return;
      const current = slides.findIndex((s) => s.classList.contains('active'));
      slides[current].classList.remove('active');
      const next = (current + 1) % slides.length;
      slides[next].classList.add('active');
      const dots = container.querySelectorAll('.dots span');
      dots.forEach((dot, i) => dot.classList.toggle('on', i === next));
    };

    const showFetchError = () => {
      const message = `<div class="fetch-error">Failed to load dashboard data</div>`;
      infoDeck.innerHTML = message;
      chartDeck.innerHTML = message;
      clocksEl.innerHTML = '';
    };

    const startTimers = () => {
      setInterval(() => rotate(infoDeck, '.info-slide'), INFO_ROTATE_MS);
      setInterval(() => rotate(chartDeck, '.chart-slide'), CHART_ROTATE_MS);
      setInterval(tickClocks, 1000);
    };

    const load = async () => {
      const res = await fetch('/api/dashboard');
      if (!res.ok) {
        throw new Error(`dashboard fetch failed: ${res.status}`);
      }
      const view = await res.json();
      generatedEl.textContent = `updated ${view.generated_at.slice(0, 19).replace('T', ' ')}`;
      clocks = view.clocks;
      renderClocks();
      renderInfoSlides(view);
      renderChartSlides(view.sections);
      startTimers();
    };

    load().catch((err) => {
      console.error(err);
      showFetchError();
    });
  </script>
</body>
</html>
"#;
