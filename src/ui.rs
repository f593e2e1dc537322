/// Fills the served page with the current date. Everything else is loaded by
/// the page script through the JSON API.
pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Burnout Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #161616;
      --bg-2: #232336;
      --ink: #e0e0e0;
      --muted: #a0a0a0;
      --card: #1e1e1e;
      --line: #2d2d2d;
      --accent-green: #00b894;
      --accent-yellow: #fdcb6e;
      --accent-red: #d63031;
      --primary: #6c5ce7;
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #101018 60%, #14141c 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 1rem;
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 24px;
      align-items: start;
    }

    form {
      display: grid;
      gap: 14px;
      background: var(--bg-1);
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 20px;
    }

    .field {
      display: grid;
      gap: 6px;
    }

    .field label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .field input[type="number"],
    .field input[type="date"],
    .field select {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 10px;
      color: var(--ink);
      padding: 10px 12px;
      font-size: 1rem;
      font-family: inherit;
    }

    .field.inline {
      grid-template-columns: auto 1fr;
      align-items: center;
    }

    .range-row {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .range-row input[type="range"] {
      flex: 1;
      accent-color: var(--primary);
    }

    #focus-display {
      min-width: 1.5em;
      text-align: center;
      font-weight: 600;
      color: var(--primary);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--primary);
      color: white;
      box-shadow: 0 10px 24px rgba(108, 92, 231, 0.3);
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .dashboard {
      display: grid;
      gap: 16px;
    }

    .status-card {
      background: var(--bg-1);
      border: 1px solid var(--line);
      border-top: 4px solid var(--line);
      border-radius: 20px;
      padding: 20px;
      display: grid;
      gap: 8px;
    }

    .status-card.green { border-top-color: var(--accent-green); }
    .status-card.yellow { border-top-color: var(--accent-yellow); }
    .status-card.red { border-top-color: var(--accent-red); }

    .status-card.green #status-title { color: var(--accent-green); }
    .status-card.yellow #status-title { color: var(--accent-yellow); }
    .status-card.red #status-title { color: var(--accent-red); }

    #status-icon {
      font-size: 1.6rem;
    }

    #status-title {
      margin: 0;
      font-size: 1.4rem;
    }

    #status-message {
      margin: 0;
      color: var(--muted);
    }

    .meter {
      display: grid;
      gap: 6px;
    }

    .meter .label-row {
      display: flex;
      justify-content: space-between;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .meter .track {
      height: 10px;
      border-radius: 999px;
      background: var(--line);
      overflow: hidden;
    }

    .meter .fill {
      height: 100%;
      width: 0;
      border-radius: 999px;
      transition: width 400ms ease;
    }

    #burnout-fill { background: var(--primary); }
    #burnout-fill.hot { background: var(--accent-red); }
    #focus-fill { background: var(--accent-green); }
    #focus-fill.low { background: var(--accent-yellow); }

    .tips {
      background: var(--bg-1);
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 20px;
    }

    .tips h2 {
      margin: 0 0 10px;
      font-size: 1.1rem;
    }

    .tips ul {
      margin: 0;
      padding-left: 18px;
      display: grid;
      gap: 8px;
      color: var(--muted);
    }

    .chart-area {
      display: grid;
      gap: 12px;
    }

    .chart-header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    .chart-header h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .legend {
      display: flex;
      gap: 16px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .legend .swatch {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 2px;
      margin-right: 6px;
    }

    .swatch.burnout { background: var(--accent-red); }
    .swatch.focus { background: var(--accent-green); }

    .chart-card {
      background: var(--bg-1);
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 16px;
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-grid {
      stroke: var(--line);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .chart-line {
      fill: none;
      stroke-width: 3;
    }

    .chart-line.burnout { stroke: var(--accent-red); }
    .chart-line.focus { stroke: var(--accent-green); }

    .chart-point {
      fill: var(--bg-1);
      stroke-width: 2;
    }

    .chart-point.burnout { stroke: var(--accent-red); }
    .chart-point.focus { stroke: var(--accent-green); }

    .status-line {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status-line[data-type="error"] {
      color: var(--accent-red);
    }

    .status-line[data-type="ok"] {
      color: var(--accent-green);
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Burnout Tracker</h1>
      <p class="subtitle">Log today's habits, see your burnout risk and focus stability.</p>
    </header>

    <section class="columns">
      <form id="daily-form">
        <div class="field">
          <label for="entry-date">Date</label>
          <input type="date" id="entry-date" value="{{DATE}}" required />
        </div>
        <div class="field">
          <label for="screen-time">Screen time (hours)</label>
          <input type="number" id="screen-time" min="0" step="0.5" value="6" required />
        </div>
        <div class="field">
          <label for="sleep-duration">Sleep (hours)</label>
          <input type="number" id="sleep-duration" min="0" step="0.5" value="7" required />
        </div>
        <div class="field">
          <label for="app-switches">App switching</label>
          <select id="app-switches">
            <option value="low">Low</option>
            <option value="medium" selected>Medium</option>
            <option value="high">High</option>
          </select>
        </div>
        <div class="field">
          <label for="focus-level">Self-rated focus (1-5)</label>
          <div class="range-row">
            <input type="range" id="focus-level" min="1" max="5" step="1" value="3" />
            <span id="focus-display">3</span>
          </div>
        </div>
        <div class="field inline">
          <input type="checkbox" id="breaks-taken" checked />
          <label for="breaks-taken">I took regular breaks</label>
        </div>
        <button type="submit">Save day</button>
        <div class="status-line" id="status-line"></div>
      </form>

      <div class="dashboard">
        <div class="status-card" id="status-card">
          <span id="status-icon"></span>
          <h2 id="status-title">No entry yet</h2>
          <p id="status-message">Submit the form to score your day.</p>
        </div>
        <div class="meter">
          <div class="label-row">
            <span>Burnout risk</span>
            <span id="burnout-value">--</span>
          </div>
          <div class="track"><div class="fill" id="burnout-fill"></div></div>
        </div>
        <div class="meter">
          <div class="label-row">
            <span>Focus stability</span>
            <span id="focus-value">--</span>
          </div>
          <div class="track"><div class="fill" id="focus-fill"></div></div>
        </div>
        <div class="tips">
          <h2>Tips</h2>
          <ul id="tips-list"></ul>
        </div>
      </div>
    </section>

    <section class="chart-area">
      <div class="chart-header">
        <h2>Recent trend</h2>
        <div class="legend">
          <span><span class="swatch burnout"></span>Burnout risk</span>
          <span><span class="swatch focus"></span>Focus stability</span>
        </div>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 260" aria-label="Trend chart" role="img"></svg>
      </div>
    </section>

    <p class="subtitle">Entries are kept per calendar day; the chart shows your last 7 logged days.</p>
  </main>

  <script>
    const form = document.getElementById('daily-form');
    const dateEl = document.getElementById('entry-date');
    const screenEl = document.getElementById('screen-time');
    const sleepEl = document.getElementById('sleep-duration');
    const switchesEl = document.getElementById('app-switches');
    const focusEl = document.getElementById('focus-level');
    const focusDisplay = document.getElementById('focus-display');
    const breaksEl = document.getElementById('breaks-taken');
    const statusLine = document.getElementById('status-line');
    const statusCard = document.getElementById('status-card');
    const statusIcon = document.getElementById('status-icon');
    const statusTitle = document.getElementById('status-title');
    const statusMessage = document.getElementById('status-message');
    const burnoutValue = document.getElementById('burnout-value');
    const burnoutFill = document.getElementById('burnout-fill');
    const focusValue = document.getElementById('focus-value');
    const focusFill = document.getElementById('focus-fill');
    const tipsList = document.getElementById('tips-list');
    const chartEl = document.getElementById('chart');

    const icons = { green: '✨', yellow: '🌫️', red: '🔥' };

    const setStatus = (message, type) => {
      statusLine.textContent = message;
      statusLine.dataset.type = type || '';
    };

    const showResults = (results) => {
      statusCard.classList.remove('green', 'yellow', 'red');
      statusCard.classList.add(results.colorClass);
      statusIcon.textContent = icons[results.colorClass] || '';
      statusTitle.textContent = results.status;
      statusMessage.textContent = results.message;

      burnoutValue.textContent = results.burnoutScore + '%';
      burnoutFill.style.width = results.burnoutScore + '%';
      burnoutFill.classList.toggle('hot', results.burnoutScore > 70);

      focusValue.textContent = results.focusStability + '%';
      focusFill.style.width = results.focusStability + '%';
      focusFill.classList.toggle('low', results.focusStability < 50);

      tipsList.innerHTML = '';
      results.tips.forEach((tip) => {
        const li = document.createElement('li');
        li.textContent = tip;
        tipsList.appendChild(li);
      });
    };

    const fillForm = (inputs) => {
      screenEl.value = inputs.screenTime;
      sleepEl.value = inputs.sleep;
      switchesEl.value = inputs.switches;
      focusEl.value = inputs.focus;
      focusDisplay.textContent = inputs.focus;
      breaksEl.checked = inputs.breaks;
    };

    const renderChart = (trend) => {
      if (!trend.labels.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const count = trend.labels.length;
      const xStep = count > 1 ? (width - paddingX * 2) / (count - 1) : 0;
      const x = (index) => (count > 1 ? paddingX + index * xStep : width / 2);
      const y = (value) => height - paddingY - (value / 100) * (height - top - paddingY);

      let grid = '';
      for (let value = 0; value <= 100; value += 25) {
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${value}</text>`;
      }

      const series = (values, kind) => {
        const path = values
          .map((value, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(value).toFixed(2)}`)
          .join(' ');
        const circles = values
          .map((value, index) => `<circle class="chart-point ${kind}" cx="${x(index)}" cy="${y(value)}" r="4" />`)
          .join('');
        return `<path class="chart-line ${kind}" d="${path}" />${circles}`;
      };

      const xLabels = trend.labels
        .map((label, index) => `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${label.slice(5)}</text>`)
        .join('');

      chartEl.innerHTML = `
        ${grid}
        ${series(trend.burnout, 'burnout')}
        ${series(trend.focus, 'focus')}
        ${xLabels}
      `;
    };

    const loadTrend = async () => {
      const res = await fetch('/api/trend');
      if (!res.ok) {
        throw new Error('Unable to load trend');
      }
      renderChart(await res.json());
    };

    const loadDay = async (date) => {
      const res = await fetch('/api/day/' + date);
      if (!res.ok) {
        throw new Error('Unable to load entry');
      }
      const entry = await res.json();
      if (entry) {
        fillForm(entry.inputs);
        showResults(entry.results);
      }
    };

    focusEl.addEventListener('input', () => {
      focusDisplay.textContent = focusEl.value;
    });

    dateEl.addEventListener('change', () => {
      loadDay(dateEl.value).catch((err) => setStatus(err.message, 'error'));
    });

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const payload = {
        date: dateEl.value,
        inputs: {
          screenTime: parseFloat(screenEl.value),
          sleep: parseFloat(sleepEl.value),
          breaks: breaksEl.checked,
          switches: switchesEl.value,
          focus: parseInt(focusEl.value, 10)
        }
      };

      setStatus('Saving...', '');
      fetch('/api/entry', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      })
        .then(async (res) => {
          if (!res.ok) {
            throw new Error((await res.text()) || 'Request failed');
          }
          return res.json();
        })
        .then((entry) => {
          showResults(entry.results);
          setStatus('Saved ✅', 'ok');
          setTimeout(() => setStatus('', ''), 2000);
          return loadTrend();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    loadDay(dateEl.value).catch((err) => setStatus(err.message, 'error'));
    loadTrend().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
