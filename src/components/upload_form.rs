use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::loading_button::LoadingButton;
use crate::config::AppSettings;
use crate::models::upload::FileStat;
use crate::services::notify;

/// Upload form: file-selection feedback with a client-side 500 MiB cap, and
/// a submit handler that immediately swaps the button into its busy state.
///
/// Submission is not re-validated here; the cap is UX convenience and the
/// server enforces the real limit. The button is never re-enabled
/// client-side — the page is expected to navigate away on submit.
#[function_component(UploadForm)]
pub fn upload_form() -> Html {
    let settings = use_context::<AppSettings>().unwrap_or_default();

    let selected = use_state(|| None::<FileStat>);
    let submitting = use_state(|| false);
    let file_input = use_node_ref();

    let on_file_change = {
        let selected = selected.clone();
        let file_input = file_input.clone();
        Callback::from(move |e: Event| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = target.files().and_then(|list| list.get(0)) else {
                selected.set(None);
                return;
            };

            let stat = FileStat::from_file(&file);
            if stat.is_oversize() {
                notify::show_error("File size exceeds 500 MiB limit!");
                if let Some(input) = file_input.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            }
            selected.set(Some(stat));
        })
    };

    let on_submit = {
        let submitting = submitting.clone();
        Callback::from(move |_: SubmitEvent| {
            // Native submission proceeds; only the button state changes here.
            submitting.set(true);
        })
    };

    html! {
        <form
            id="uploadForm"
            action={settings.url("/upload")}
            method="post"
            enctype="multipart/form-data"
            onsubmit={on_submit}
        >
            <div class="form-group">
                <label for="videoFile">{"Video file"}</label>
                <input
                    ref={file_input}
                    id="videoFile"
                    name="videoFile"
                    type="file"
                    accept="video/*"
                    class="form-input"
                    onchange={on_file_change}
                />
            </div>

            <div id="fileInfo">
                if let Some(stat) = &*selected {
                    <FileInfoPanel stat={stat.clone()} />
                }
            </div>

            <LoadingButton class="btn-primary" busy={*submitting} busy_label="Uploading...">
                {"Upload"}
            </LoadingButton>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct FileInfoPanelProps {
    stat: FileStat,
}

/// Name, size, and MIME type of the selected file; error-styled when the
/// file is over the cap.
#[function_component(FileInfoPanel)]
fn file_info_panel(props: &FileInfoPanelProps) -> Html {
    let stat = &props.stat;
    let (panel_class, size_line) = if stat.is_oversize() {
        ("file-info panel-danger", "File size exceeds 500 MiB limit!".to_string())
    } else {
        (
            "file-info panel-info",
            format!("Size: {:.2} MiB", stat.size_mib()),
        )
    };

    html! {
        <div class={panel_class}>
            <p><strong>{"File: "}</strong>{&stat.name}</p>
            <p><strong>{size_line}</strong></p>
            <p><strong>{"Type: "}</strong>{&stat.mime}</p>
        </div>
    }
}
