pub const DEFAULT_NOTIFICATION: &str = r#"{
    "title": "Game Night is happening on November 25 🥳",
    "body": "You're warmly invited to the next Game Night on November 25, be sure to save the date :)",
    "icon": "/favicon.svg",
    "navigate": "/play",
    "requireInteraction": true,
    "actions": [
        {
            "action": "save",
            "title": "Save to Calendar",
            "navigate": "/play/event.ics"
        }
    ]
}"#;

pub fn render_index(scope: &str, notification: &str) -> String {
    INDEX_HTML
        .replace("{{SCOPE}}", &escape_html(scope))
        .replace("{{NOTIFICATION}}", &escape_html(notification))
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Push Testbed</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg), #ffe9d4 70%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Georgia", serif;
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: #5f5c57;
    }

    textarea, input {
      width: 100%;
      font-family: monospace;
      font-size: 0.9rem;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      padding: 12px;
    }

    textarea {
      min-height: 260px;
    }

    .row {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      align-items: center;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    button.primary {
      background: var(--accent);
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 16px;
    }

    .card {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .card.closed {
      opacity: 0.5;
    }

    .card.focused {
      border-color: var(--accent);
    }

    .status[data-type="error"] {
      color: #b3261e;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Push Testbed</h1>
      <p class="subtitle">Worker scope <code>{{SCOPE}}</code></p>
    </header>

    <section class="card">
      <label for="notification">Notification</label>
      <textarea id="notification">{{NOTIFICATION}}</textarea>
      <div class="row">
        <button class="primary" id="send" type="button">Send push</button>
        <select id="permission">
          <option value="granted">granted</option>
          <option value="denied">denied</option>
          <option value="default">default</option>
        </select>
        <button id="set-permission" type="button">Set permission</button>
      </div>
    </section>

    <section class="card">
      <form class="row" id="window-form">
        <input id="window-url" placeholder="/play" />
        <button type="submit">Open tab</button>
      </form>
    </section>

    <div class="columns">
      <section>
        <h2>Notifications</h2>
        <div id="notifications"></div>
      </section>
      <section>
        <h2>Windows</h2>
        <div id="windows"></div>
      </section>
    </div>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const notificationsEl = document.getElementById('notifications');
    const windowsEl = document.getElementById('windows');
    const permissionEl = document.getElementById('permission');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      render(await res.json());
    };

    const card = (classes) => {
      const el = document.createElement('div');
      el.className = ['card', ...classes].join(' ');
      return el;
    };

    const button = (label, onClick) => {
      const el = document.createElement('button');
      el.type = 'button';
      el.textContent = label;
      el.addEventListener('click', () => onClick().catch((err) => setStatus(err.message, 'error')));
      return el;
    };

    const render = (browser) => {
      permissionEl.value = browser.permission;
      notificationsEl.replaceChildren(...browser.notifications.slice().reverse().map((n) => {
        const el = card(n.open ? [] : ['closed']);
        const title = document.createElement('strong');
        title.textContent = n.title;
        const body = document.createElement('span');
        body.textContent = n.options.body || '';
        const row = document.createElement('div');
        row.className = 'row';
        row.append(button('Click', () => request('POST', `/api/notifications/${n.id}/click`, {})));
        (n.options.actions || []).forEach((a) => {
          row.append(button(a.title || a.action, () =>
            request('POST', `/api/notifications/${n.id}/click`, { action: a.action })));
        });
        el.append(title, body);
        if (n.open) {
          el.append(row);
        }
        return el;
      }));
      windowsEl.replaceChildren(...browser.windows.map((w) => {
        const el = card(w.focused ? ['focused'] : []);
        el.textContent = `#${w.id} ${w.url}${w.controlled ? '' : ' (uncontrolled)'}`;
        return el;
      }));
    };

    document.getElementById('send').addEventListener('click', () => {
      let notification;
      try {
        notification = JSON.parse(document.getElementById('notification').value);
      } catch (err) {
        setStatus(err.message, 'error');
        return;
      }
      request('POST', '/api/send', notification)
        .then(() => setStatus('Sent', 'ok'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('set-permission').addEventListener('click', () => {
      request('PUT', '/api/permission', { permission: permissionEl.value })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('window-form').addEventListener('submit', (event) => {
      event.preventDefault();
      request('POST', '/api/windows', { url: document.getElementById('window-url').value })
        .catch((err) => setStatus(err.message, 'error'));
    });

    fetch('/api/browser')
      .then((res) => res.json())
      .then(render)
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
