// Embedded single-page client. Served from memory so the binary needs no
// asset directory at runtime.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Blazerize</title>
<style>
  :root {
    --accent: #f46b08;
    --ink: #1a1a1a;
    --muted: #6b6b6b;
    --line: #d9d9d9;
  }
  * { box-sizing: border-box; }
  body {
    margin: 0;
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", sans-serif;
    color: var(--ink);
    background: #fafafa;
  }
  main {
    max-width: 860px;
    margin: 0 auto;
    padding: 48px 24px;
  }
  h1 { margin: 0 0 8px; font-size: 28px; }
  p.lead { margin: 0 0 32px; color: var(--muted); }
  .picker {
    display: inline-block;
    padding: 12px 24px;
    border-radius: 8px;
    background: var(--accent);
    color: #fff;
    font-weight: 600;
    cursor: pointer;
    user-select: none;
  }
  .picker.disabled { opacity: 0.5; cursor: not-allowed; }
  input[type="file"] { display: none; }
  .panes {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 24px;
    margin-top: 32px;
  }
  @media (max-width: 640px) { .panes { grid-template-columns: 1fr; } }
  .pane h2 {
    margin: 0 0 12px;
    font-size: 14px;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.06em;
    color: var(--muted);
  }
  .frame {
    position: relative;
    width: 100%;
    aspect-ratio: 1 / 1;
    border: 2px dashed var(--line);
    border-radius: 12px;
    overflow: hidden;
    background: #fff;
    display: flex;
    align-items: center;
    justify-content: center;
  }
  .frame img {
    width: 100%;
    height: 100%;
    object-fit: contain;
    display: none;
  }
  .frame .hint { color: var(--muted); font-size: 14px; }
  .spinner {
    display: none;
    width: 42px;
    height: 42px;
    border: 4px solid rgba(244, 107, 8, 0.2);
    border-top-color: var(--accent);
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
  }
  @keyframes spin { to { transform: rotate(360deg); } }
  .error {
    display: none;
    margin-top: 24px;
    padding: 12px 16px;
    border-radius: 8px;
    background: #fdecea;
    color: #b3261e;
    font-size: 14px;
    white-space: pre-wrap;
  }
</style>
</head>
<body>
<main>
  <h1>Blazerize</h1>
  <p class="lead">Upload a photo and get it back wearing an orange blazer, white shirt, and black tie. Nothing else changes.</p>

  <label class="picker" id="picker-label" for="picker">Choose a photo</label>
  <input type="file" id="picker" accept="image/*">

  <div class="panes">
    <section class="pane">
      <h2>Original</h2>
      <div class="frame">
        <span class="hint" id="original-hint">No photo yet</span>
        <img id="original" alt="Original upload">
      </div>
    </section>
    <section class="pane">
      <h2>Edited</h2>
      <div class="frame">
        <span class="hint" id="edited-hint">Waiting for an upload</span>
        <div class="spinner" id="spinner"></div>
        <img id="edited" alt="Edited result">
      </div>
    </section>
  </div>

  <div class="error" id="error"></div>
</main>

<script>
(function () {
  "use strict";

  var picker = document.getElementById("picker");
  var pickerLabel = document.getElementById("picker-label");
  var original = document.getElementById("original");
  var originalHint = document.getElementById("original-hint");
  var edited = document.getElementById("edited");
  var editedHint = document.getElementById("edited-hint");
  var spinner = document.getElementById("spinner");
  var errorBox = document.getElementById("error");

  var previewUrl = null;
  var resultUrl = null;
  var busy = false;

  // Replace a tracked object URL, revoking the one it displaces.
  function swapUrl(current, next) {
    if (current) {
      URL.revokeObjectURL(current);
    }
    return next;
  }

  function setBusy(value) {
    busy = value;
    picker.disabled = value;
    pickerLabel.classList.toggle("disabled", value);
    spinner.style.display = value ? "block" : "none";
    if (value) {
      edited.style.display = "none";
      editedHint.style.display = "none";
    }
  }

  function showError(message) {
    errorBox.textContent = message;
    errorBox.style.display = "block";
    editedHint.textContent = "Waiting for an upload";
    editedHint.style.display = "block";
  }

  function clearError() {
    errorBox.textContent = "";
    errorBox.style.display = "none";
  }

  picker.addEventListener("change", function () {
    if (busy) {
      return;
    }
    var file = picker.files && picker.files[0];
    if (!file) {
      return;
    }

    clearError();

    previewUrl = swapUrl(previewUrl, URL.createObjectURL(file));
    original.src = previewUrl;
    original.style.display = "block";
    originalHint.style.display = "none";

    upload(file);
  });

  function upload(file) {
    setBusy(true);

    var form = new FormData();
    form.append("image", file);

    fetch("/api/edit", { method: "POST", body: form })
      .then(function (response) {
        if (!response.ok) {
          return response.json().then(
            function (payload) {
              throw new Error(payload && payload.error ? payload.error : "Edit failed");
            },
            function () {
              throw new Error("Edit failed (HTTP " + response.status + ")");
            }
          );
        }
        return response.blob();
      })
      .then(function (blob) {
        resultUrl = swapUrl(resultUrl, URL.createObjectURL(blob));
        edited.src = resultUrl;
        edited.style.display = "block";
        editedHint.style.display = "none";
      })
      .catch(function (err) {
        showError(err && err.message ? err.message : "Edit failed");
      })
      .finally(function () {
        setBusy(false);
        // Allow re-selecting the same file.
        picker.value = "";
      });
  }

  window.addEventListener("pagehide", function () {
    previewUrl = swapUrl(previewUrl, null);
    resultUrl = swapUrl(resultUrl, null);
  });
})();
</script>
</body>
</html>
"##;
