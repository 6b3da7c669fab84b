//! Search widget assets, embedded in the binary.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>TravelBloom - Discover Your Next Adventure</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
  <link rel="stylesheet" href="/style.css">
</head>
<body>
  <header class="hero">
    <h1>Discover Your Next Adventure</h1>
    <div class="search-container">
      <input id="searchInput" type="text" placeholder="Search beaches, temples, or countries" autofocus>
      <button id="searchButton" type="button">Search</button>
      <button id="clearButton" type="button" class="secondary">Clear</button>
    </div>
  </header>
  <section id="searchResults" class="search-results" hidden>
    <div id="resultsGrid" class="results-grid"></div>
  </section>
  <script src="/app.js"></script>
</body>
</html>
"#;

pub const STYLE_CSS: &str = r#"* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, sans-serif; background: #f7f7f7; color: #333; }
.hero { padding: 4rem 2rem; text-align: center; background: linear-gradient(135deg, #2c5aa0, #20b2aa); color: white; }
.hero h1 { margin-bottom: 2rem; }
.search-container { display: flex; gap: 0.5rem; justify-content: center; }
.search-container input { width: min(28rem, 100%); padding: 0.7rem 1rem; border: none; border-radius: 24px; }
.search-container button { padding: 0.7rem 1.4rem; border: none; border-radius: 24px; background: #ff6b35; color: white; cursor: pointer; }
.search-container button.secondary { background: #666; }
.search-results { padding: 2rem; }
.results-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }
.result-card { background: white; border-radius: 12px; overflow: hidden; box-shadow: 0 4px 12px rgba(0,0,0,0.08); }
.result-card img { width: 100%; height: 180px; object-fit: cover; }
.card-content { padding: 1rem; }
.badge { color: white; padding: 0.2rem 0.5rem; border-radius: 12px; font-size: 0.8rem; text-transform: uppercase; }
.country { color: #ff6b35; font-weight: 600; margin: 0.5rem 0; }
.local-time { margin-top: 0.8rem; color: #2c5aa0; font-weight: 600; }
.panel { grid-column: 1 / -1; text-align: center; padding: 2rem; color: #666; }
.spinner { margin: 0 auto; width: 40px; height: 40px; border: 4px solid #ddd; border-top-color: #2c5aa0; border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;

pub const APP_JS: &str = r#"const input = document.getElementById('searchInput');
const section = document.getElementById('searchResults');
const grid = document.getElementById('resultsGrid');
let latest = 0;

function escapeHtml(text) {
  const div = document.createElement('div');
  div.textContent = text == null ? '' : String(text);
  return div.innerHTML;
}

function show(html) {
  grid.innerHTML = html;
  section.hidden = false;
}

function showLoading() {
  show('<div class="panel"><div class="spinner"></div><p>Searching amazing destinations...</p></div>');
}

function showError(message) {
  show(`<div class="panel"><i class="fas fa-exclamation-triangle"></i><h3>${escapeHtml(message)}</h3></div>`);
}

function card(r) {
  const country = r.country
    ? `<p class="country"><i class="fas fa-map-marker-alt"></i> ${escapeHtml(r.country)}</p>`
    : '';
  return `<div class="result-card">
    <img src="${escapeHtml(r.imageUrl)}" alt="${escapeHtml(r.name)}" data-fallback="${escapeHtml(r.fallbackImageUrl)}">
    <div class="card-content">
      <i class="${escapeHtml(r.icon)}" style="color: ${escapeHtml(r.color)}"></i>
      <span class="badge" style="background: ${escapeHtml(r.color)}">${escapeHtml(r.type)}</span>
      <h3>${escapeHtml(r.name)}</h3>
      ${country}
      <p>${escapeHtml(r.description)}</p>
      <div class="local-time"><i class="fas fa-clock"></i> Local Time: ${escapeHtml(r.localTime)}</div>
    </div>
  </div>`;
}

function render(body) {
  if (body.noResults) {
    show(`<div class="panel"><h3>${escapeHtml(body.noResults.headline)}</h3><p>${escapeHtml(body.noResults.hint)}</p></div>`);
    return;
  }
  show(body.results.map(card).join(''));
  grid.querySelectorAll('img[data-fallback]').forEach(img => {
    img.addEventListener('error', () => { img.src = img.dataset.fallback; }, { once: true });
  });
  section.scrollIntoView({ behavior: 'smooth', block: 'start' });
}

async function searchDestinations() {
  const query = input.value.trim();
  if (!query) {
    showError('Please enter a search term.');
    return;
  }
  const ticket = ++latest;
  showLoading();
  try {
    const response = await fetch(`/api/search?query=${encodeURIComponent(query)}`);
    const body = await response.json();
    if (ticket !== latest) return;
    if (!response.ok) {
      showError(body.error);
      return;
    }
    render(body);
  } catch (err) {
    if (ticket === latest) showError('Failed to load travel data. Please try again later.');
  }
}

function clearResults() {
  latest++;
  input.value = '';
  grid.innerHTML = '';
  section.hidden = true;
}

async function checkStatus() {
  try {
    const response = await fetch('/api/status');
    const body = await response.json();
    if (body.error) showError(body.error);
  } catch (err) {
    showError('Failed to load travel data. Please try again later.');
  }
}

input.addEventListener('keypress', e => { if (e.key === 'Enter') searchDestinations(); });
document.getElementById('searchButton').addEventListener('click', searchDestinations);
document.getElementById('clearButton').addEventListener('click', clearResults);
checkStatus();
"#;
