use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-[#2C1810] text-[#F5E6D3] py-12">
            <div class="container text-center">
                <p class="text-sm text-[#D4A574]">"Made with love from Mama Alastor’s recipe"</p>
            </div>
        </footer>
    }
}
