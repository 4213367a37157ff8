//! Global CSS styles for Wellspring.
//!
//! Dark terminal palette with warm accents; class names match the
//! components in `wellspring-ui`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --bg: #0a0a0a;
  --border: #1a1a1a;

  /* Accents */
  --accent: #5a7a5a;
  --accent-glow: #7cb87c;
  --highlight: #00d4aa;
  --heading: #d4af37;
  --heading-glow: rgba(212, 175, 55, 0.3);

  /* Foreground */
  --fg: #f5f5f5;
  --fg-soft: rgba(245, 245, 245, 0.7);
  --fg-muted: rgba(245, 245, 245, 0.5);

  /* Typography */
  --font-display: 'Cormorant Garamond', Georgia, serif;
  --font-body: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-3xl: 3rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-body);
  background: var(--bg);
  color: var(--fg);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--heading);
  text-shadow: 0 0 30px var(--heading-glow);
  letter-spacing: 0.1em;
}

.tagline {
  font-size: var(--text-lg);
  color: var(--fg-soft);
}

.section-title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  color: var(--heading);
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

/* === Layout === */
.dashboard,
.community-page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  padding: 3rem 2rem;
}

.dashboard-header {
  text-align: center;
}

.dashboard-grid {
  width: 100%;
  max-width: 480px;
}

/* === Buttons === */
.btn-primary {
  padding: 0.75rem 2rem;
  background: transparent;
  border: 1px solid var(--accent);
  border-radius: 4px;
  color: var(--fg);
  font-family: var(--font-body);
  font-size: var(--text-base);
  cursor: pointer;
  transition: all 0.3s ease;
}

.btn-primary:hover {
  border-color: var(--accent-glow);
  box-shadow: 0 0 20px rgba(124, 184, 124, 0.3);
  transform: translateY(-1px);
}

.btn-ghost {
  padding: 0.75rem 2rem;
  background: transparent;
  border: 1px solid transparent;
  border-radius: 4px;
  color: var(--fg-soft);
  font-family: var(--font-body);
  font-size: var(--text-base);
  cursor: pointer;
  transition: all 0.2s ease;
}

.btn-ghost:hover {
  color: var(--fg);
  border-color: var(--border);
}

/* === Community Snapshot Card === */
.community-snapshot {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  background: rgba(15, 15, 15, 0.6);
  border: 1px solid rgba(212, 175, 55, 0.2);
  border-radius: 8px;
  padding: 2rem;
  backdrop-filter: blur(12px);
  transition: all 0.3s ease;
}

.community-snapshot:hover {
  border-color: rgba(212, 175, 55, 0.4);
  box-shadow: 0 0 20px rgba(212, 175, 55, 0.1);
}

.snapshot-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.snapshot-icon {
  font-size: var(--text-xl);
}

.snapshot-loading {
  text-align: center;
  color: var(--fg-muted);
  font-size: var(--text-sm);
  padding: 1rem 0;
}

.snapshot-details {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.snapshot-line {
  display: flex;
  align-items: baseline;
  gap: 0.75rem;
  color: var(--fg-soft);
}

.snapshot-line.popular-tip .line-text {
  font-style: italic;
  color: var(--highlight);
}

.snapshot-cta {
  align-self: flex-start;
}

/* === Community Hub === */
.community-stats {
  width: 100%;
  max-width: 480px;
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.stat-box {
  text-align: center;
  padding: 1.5rem 1rem;
  background: rgba(0, 0, 0, 0.3);
  border-radius: 4px;
  border: 1px solid rgba(245, 245, 245, 0.05);
}

.stat-value {
  font-size: var(--text-3xl);
  font-weight: 600;
  color: var(--heading);
}

.stat-label {
  font-size: var(--text-xs);
  color: var(--fg-muted);
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.popular-tip {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-style: italic;
  color: var(--highlight);
  text-align: center;
}

.summary-source {
  font-size: var(--text-xs);
  color: var(--fg-muted);
}

@media (max-width: 500px) {
  .stats-grid {
    grid-template-columns: 1fr;
  }
}
"#;
