//! Global CSS styles for the Citadel gallery.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PORTAL (Backgrounds) */
  --portal-night: #0f1419;
  --portal-panel: #1b232b;
  --portal-border: #2a343e;

  /* PORTAL GREEN (Titles, active controls) */
  --portal-green: #97ce4c;
  --portal-glow: rgba(151, 206, 76, 0.35);

  /* TEXT */
  --text-primary: #f0f0f0;
  --text-secondary: rgba(240, 240, 240, 0.7);
  --text-muted: rgba(240, 240, 240, 0.5);

  /* SEMANTIC */
  --danger: #ff5a4f;
  --warning: #f0c040;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-3xl: 2.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: var(--font-sans);
  background: var(--portal-night);
  color: var(--text-primary);
  line-height: 1.5;
}

/* === Shell === */
.app-shell {
  display: flex;
  flex-direction: column;
  height: 100vh;
  max-width: 80rem;
  margin: 0 auto;
  padding: 1rem 2rem 0;
}

.app-header {
  flex-shrink: 0;
  text-align: center;
  margin-bottom: 1.5rem;
}

.app-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  letter-spacing: 0.05em;
  color: var(--portal-green);
  text-shadow: 0 0 24px var(--portal-glow);
  margin-bottom: 1rem;
}

/* === Language Toggle === */
.language-toggle {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
}

.lang-btn {
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 0.25rem;
  font-weight: 500;
  background: var(--portal-panel);
  color: var(--text-secondary);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.lang-btn:hover {
  background: var(--portal-border);
}

.lang-btn.active {
  background: var(--portal-green);
  color: var(--portal-night);
}

/* === Filter Bar === */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1.5rem;
  padding: 1rem;
  margin-bottom: 2rem;
  background: var(--portal-panel);
  border-radius: 0.5rem;
}

.filter-field {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.filter-field select,
.filter-field input {
  padding: 0.5rem;
  background: var(--portal-night);
  color: var(--text-primary);
  border: 1px solid var(--portal-border);
  border-radius: 0.25rem;
}

.filter-field select:focus,
.filter-field input:focus {
  outline: none;
  border-color: var(--portal-green);
}

/* === Gallery === */
.gallery-scroll {
  flex: 1;
  overflow-y: auto;
  padding-bottom: 2rem;
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(11rem, 1fr));
  gap: 1.25rem;
}

.gallery-status {
  text-align: center;
  font-size: var(--text-lg);
  color: var(--text-muted);
  padding: 1.25rem 0;
}

.gallery-status--loading {
  color: var(--warning);
}

.gallery-status--error {
  color: var(--danger);
  padding: 2.5rem 0;
}

.gallery-banner--error {
  text-align: center;
  font-size: var(--text-sm);
  color: var(--danger);
  margin-bottom: 1rem;
}

.gallery-end {
  text-align: center;
  font-size: var(--text-lg);
  color: var(--text-secondary);
  padding: 1.25rem 0;
}

/* === Character Card === */
.character-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  padding: 1rem 0.75rem;
  background: var(--portal-panel);
  border: 1px solid var(--portal-border);
  border-radius: 0.5rem;
  animation: card-in var(--transition-normal) both;
  animation-delay: calc(var(--index) * 20ms);
  transition: border-color var(--transition-fast);
}

.character-card:hover {
  border-color: var(--portal-green);
}

.character-card__portrait {
  width: 120px;
  height: 120px;
  object-fit: cover;
  border-radius: 50%;
  margin-bottom: 0.75rem;
}

.character-card__name {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.character-card__row {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.character-card__row strong {
  color: var(--text-primary);
  font-weight: 500;
}

@keyframes card-in {
  from { opacity: 0; transform: translateY(6px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
