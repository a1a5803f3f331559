use yew::html::Scope;
use yew::prelude::*;

use crate::components::wizard::{Msg, TableWizardComponent};

/// Generated listing with a copy button.
pub fn code_preview(component: &TableWizardComponent, link: &Scope<TableWizardComponent>) -> Html {
    let label = if component.copied { "Copied!" } else { "Copy Code" };

    html! {
        <div class="code-preview">
            <div class="code-toolbar">
                <button class="btn outline sm" onclick={link.callback(|_| Msg::CopySnippet)}>
                    { label }
                </button>
            </div>
            <pre class="code-block"><code>{ component.snippet.clone() }</code></pre>
        </div>
    }
}
