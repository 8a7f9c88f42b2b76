//! Embedded single-page frontend
//!
//! Renders the stock table and a chat transcript. The transcript lives in
//! browser memory only; the table re-renders from the `stocks` snapshot each
//! response carries, so the view resynchronizes in one round trip.

/// Frontend HTML with inline CSS and JavaScript, served at `/`.
pub const PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Fincat</title>
    <style>
        :root {
            --bg-primary: #0d1117;
            --bg-card: #161b22;
            --border: #30363d;
            --text-primary: #e6edf3;
            --text-secondary: #8b949e;
            --accent: #2f81f7;
            --danger: #f85149;
        }

        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
            background: var(--bg-primary);
            color: var(--text-primary);
            min-height: 100vh;
        }

        .container {
            max-width: 960px;
            margin: 0 auto;
            padding: 24px;
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 20px;
        }

        header {
            grid-column: 1 / -1;
            display: flex;
            justify-content: space-between;
            align-items: baseline;
            padding-bottom: 16px;
            border-bottom: 1px solid var(--border);
        }

        h1 { font-size: 22px; }

        .hint {
            font-size: 13px;
            color: var(--text-secondary);
        }

        .card {
            background: var(--bg-card);
            border: 1px solid var(--border);
            border-radius: 10px;
            padding: 16px;
        }

        .card h2 {
            font-size: 14px;
            color: var(--text-secondary);
            text-transform: uppercase;
            letter-spacing: 0.5px;
            margin-bottom: 12px;
        }

        table {
            width: 100%;
            border-collapse: collapse;
            font-size: 14px;
        }

        th, td {
            text-align: left;
            padding: 8px 10px;
            border-bottom: 1px solid var(--border);
        }

        th { color: var(--text-secondary); font-weight: 500; }

        td.price { font-variant-numeric: tabular-nums; }

        .empty {
            color: var(--text-secondary);
            padding: 16px 0;
            font-size: 14px;
        }

        .banner {
            grid-column: 1 / -1;
            display: none;
            background: rgba(248, 81, 73, 0.15);
            border: 1px solid var(--danger);
            border-radius: 8px;
            color: var(--danger);
            padding: 10px 14px;
            font-size: 14px;
        }

        .banner.visible { display: block; }

        .transcript {
            height: 320px;
            overflow-y: auto;
            display: flex;
            flex-direction: column;
            gap: 8px;
            margin-bottom: 12px;
        }

        .msg {
            max-width: 85%;
            padding: 8px 12px;
            border-radius: 10px;
            font-size: 14px;
            white-space: pre-wrap;
        }

        .msg.user {
            align-self: flex-end;
            background: var(--accent);
            color: #fff;
        }

        .msg.bot {
            align-self: flex-start;
            background: var(--bg-primary);
            border: 1px solid var(--border);
        }

        form { display: flex; gap: 8px; }

        input {
            flex: 1;
            background: var(--bg-primary);
            border: 1px solid var(--border);
            border-radius: 8px;
            color: var(--text-primary);
            padding: 10px 12px;
            font-size: 14px;
        }

        input:focus { outline: 1px solid var(--accent); }

        button {
            background: var(--accent);
            border: none;
            border-radius: 8px;
            color: #fff;
            padding: 10px 18px;
            font-size: 14px;
            cursor: pointer;
        }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Fincat</h1>
            <span class="hint">try: add AAPL Apple 195.3 &middot; update AAPL 200 &middot; remove AAPL &middot; list</span>
        </header>

        <div class="banner" id="banner"></div>

        <div class="card">
            <h2>Stocks</h2>
            <div id="stocks"><div class="empty">Loading&hellip;</div></div>
        </div>

        <div class="card">
            <h2>Chat</h2>
            <div class="transcript" id="transcript"></div>
            <form id="chatForm">
                <input id="chatInput" placeholder="Type a command" autocomplete="off">
                <button type="submit">Send</button>
            </form>
        </div>
    </div>

    <script>
        // Transcript lives here only; the server keeps no chat history.
        const transcript = [];

        function showError(message) {
            const banner = document.getElementById('banner');
            banner.textContent = message;
            banner.classList.add('visible');
        }

        function clearError() {
            document.getElementById('banner').classList.remove('visible');
        }

        function renderStocks(stocks) {
            const el = document.getElementById('stocks');
            if (!stocks.length) {
                el.innerHTML = '<div class="empty">No stocks tracked yet.</div>';
                return;
            }
            const sorted = [...stocks].sort((a, b) => a.symbol.localeCompare(b.symbol));
            el.innerHTML = `
                <table>
                    <thead><tr><th>Symbol</th><th>Name</th><th>Price</th></tr></thead>
                    <tbody>
                        ${sorted.map(s => `
                            <tr>
                                <td>${s.symbol}</td>
                                <td>${s.name}</td>
                                <td class="price">${s.price.toFixed(2)}</td>
                            </tr>
                        `).join('')}
                    </tbody>
                </table>
            `;
        }

        function renderTranscript() {
            const el = document.getElementById('transcript');
            el.innerHTML = transcript.map(t => `
                <div class="msg user">${t.user}</div>
                <div class="msg bot">${t.reply}</div>
            `).join('');
            el.scrollTop = el.scrollHeight;
        }

        async function loadStocks() {
            try {
                const res = await fetch('/stocks');
                if (!res.ok) throw new Error(`GET /stocks: ${res.status}`);
                renderStocks(await res.json());
                clearError();
            } catch (err) {
                showError(`Could not load stocks: ${err.message}`);
            }
        }

        async function sendChat(message) {
            try {
                const res = await fetch('/chat', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ message }),
                });
                if (!res.ok) throw new Error(`POST /chat: ${res.status}`);
                const body = await res.json();
                transcript.push({ user: message, reply: body.reply });
                renderTranscript();
                renderStocks(body.stocks);
                clearError();
            } catch (err) {
                showError(`Chat failed: ${err.message}`);
            }
        }

        document.getElementById('chatForm').addEventListener('submit', (event) => {
            event.preventDefault();
            const input = document.getElementById('chatInput');
            const message = input.value.trim();
            if (!message) return;
            input.value = '';
            sendChat(message);
        });

        loadStocks();
    </script>
</body>
</html>
"##;
