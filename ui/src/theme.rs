pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #0a0e14;
  --bg-elev-1: #101721;
  --panel: #121a26;
  --border: rgba(255, 255, 255, 0.08);
  --border-strong: rgba(255, 255, 255, 0.16);
  --text: #e6edf7;
  --text-dim: #b7c6d9;
  --text-muted: #7f8ba0;
  --accent: #5cb0ff;
  --accent-strong: #7ac6ff;
  --positive: #3fb68b;
  --negative: #f0635c;
  --warning: #f7c843;
  --surface-hover: rgba(255, 255, 255, 0.05);
  --shadow-soft: 0 14px 42px rgba(0, 0, 0, 0.38);
  --radius: 10px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --font-body: "Inter", "SF Pro Text", system-ui, -apple-system, sans-serif;
  --font-size-sm: 13px;
  --font-size-md: 15px;
  --font-size-lg: 17px;
  --transition: 140ms ease-out;
}

* { box-sizing: border-box; }
html, body {
  padding: 0;
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
  font-size: var(--font-size-md);
}

main { min-height: 100vh; }

a { color: var(--accent); text-decoration: none; }
a:hover { color: var(--accent-strong); }

.page {
  max-width: 1080px;
  margin: 0 auto;
  padding: var(--space-6);
}

.panel {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: var(--shadow-soft);
  padding: var(--space-4);
}

.page-title {
  font-size: var(--font-size-lg);
  font-weight: 600;
  margin: 0 0 var(--space-4) 0;
}

.filter-bar {
  display: flex;
  gap: var(--space-3);
  flex-wrap: wrap;
  margin-bottom: var(--space-4);
}

.input-stack { display: flex; flex-direction: column; gap: 4px; }
.input-label {
  font-size: var(--font-size-sm);
  color: var(--text-muted);
}
.input-stack input {
  background: var(--bg-elev-1);
  color: var(--text);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: var(--space-2) var(--space-3);
  font-size: var(--font-size-sm);
  outline: none;
  transition: border-color var(--transition);
}
.input-stack input:focus { border-color: var(--accent); }

.btn {
  background: var(--bg-elev-1);
  color: var(--text);
  border: 1px solid var(--border-strong);
  border-radius: var(--radius);
  padding: var(--space-2) var(--space-3);
  font-size: var(--font-size-sm);
  cursor: pointer;
  transition: background var(--transition);
}
.btn:hover { background: var(--surface-hover); }
.btn:disabled { opacity: 0.5; cursor: default; }
.btn-accent { border-color: var(--accent); color: var(--accent-strong); }
.btn-danger { border-color: var(--negative); color: var(--negative); }

.forms-table {
  width: 100%;
  border-collapse: collapse;
  font-size: var(--font-size-sm);
}
.forms-table th {
  text-align: left;
  color: var(--text-muted);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-bottom: 1px solid var(--border-strong);
}
.forms-table td {
  padding: var(--space-2) var(--space-3);
  border-bottom: 1px solid var(--border);
  color: var(--text-dim);
}
.forms-table tr:hover td { background: var(--surface-hover); }
.row-actions { display: flex; gap: var(--space-2); }
.empty-row td {
  text-align: center;
  color: var(--text-muted);
  padding: var(--space-6);
}

.modal-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.55);
  display: flex;
  align-items: center;
  justify-content: center;
}
.modal {
  background: var(--panel);
  border: 1px solid var(--border-strong);
  border-radius: var(--radius);
  box-shadow: var(--shadow-soft);
  padding: var(--space-6);
  max-width: 420px;
}
.modal-actions {
  display: flex;
  gap: var(--space-3);
  justify-content: flex-end;
  margin-top: var(--space-4);
}

.toast-stack {
  position: fixed;
  bottom: var(--space-4);
  right: var(--space-4);
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  z-index: 100;
}
.toast {
  border-radius: var(--radius);
  border: 1px solid var(--border-strong);
  background: var(--bg-elev-1);
  padding: var(--space-3) var(--space-4);
  font-size: var(--font-size-sm);
  cursor: pointer;
  box-shadow: var(--shadow-soft);
}
.toast-error { border-color: var(--negative); color: var(--negative); }
.toast-info { border-color: var(--accent); color: var(--accent-strong); }

.notice {
  text-align: center;
  padding: var(--space-6);
}
.notice h1 { font-size: var(--font-size-lg); margin-bottom: var(--space-3); }
.notice p { color: var(--text-dim); }
"#;
