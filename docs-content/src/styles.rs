//! CSS shared by the interactive viewer and the static export.
//!
//! The CSR viewer injects [`DOCS_CSS`] into a `<style>` element at mount;
//! the static export embeds it in the document head. Keeping one constant
//! means the two renderings cannot drift apart visually.

/// Complete stylesheet for the documentation page.
///
/// Covers:
/// - Base typography and the header/sidebar/main layout
/// - Sidebar navigation with active highlighting
/// - Overview cards and the user-role grid
/// - Topic blocks with bordered screenshot figures
/// - Mobile: off-canvas sidebar, menu button, click-away overlay
pub const DOCS_CSS: &str = r#"
*{box-sizing:border-box;}
body{font-family:system-ui,-apple-system,Segoe UI,Helvetica,Arial,sans-serif;margin:0;line-height:1.5;color:#1c1c1e;background:#fff;}
h1{font-size:2.25rem;margin:0 0 16px;}
h2{font-size:1.5rem;margin:0;}
h3{font-size:1.125rem;margin:0 0 8px;}
h4{font-size:1rem;margin:0 0 4px;}
.docs-header{position:sticky;top:0;z-index:50;display:flex;align-items:center;height:64px;padding:0 24px;border-bottom:1px solid #e4e4e7;background:rgba(255,255,255,.95);backdrop-filter:blur(8px);}
.docs-brand{display:flex;align-items:center;gap:8px;margin-right:24px;color:inherit;text-decoration:none;}
.docs-brand img{width:32px;height:32px;}
.docs-brand .brand-title{font-weight:700;font-size:1.125rem;}
.header-links{display:flex;align-items:center;gap:24px;margin-left:auto;}
.header-links a{font-size:14px;color:#71717a;text-decoration:none;}
.header-links a:hover{color:#1c1c1e;}
.menu-btn{display:none;margin-left:auto;padding:8px;border:none;background:none;font-size:18px;cursor:pointer;}
.docs-shell{display:flex;}
.docs-sidebar{position:sticky;top:64px;z-index:40;flex:none;width:256px;height:calc(100vh - 64px);border-right:1px solid #e4e4e7;background:#fff;}
.sidebar-nav{display:flex;flex-direction:column;gap:8px;padding:16px;}
.sidebar-caption{display:flex;align-items:center;gap:8px;padding:8px 12px;font-size:14px;font-weight:500;color:#71717a;}
.sidebar-link{display:flex;align-items:center;gap:12px;width:100%;padding:8px 12px;border:none;border-radius:10px;background:none;font-size:14px;color:#71717a;text-align:left;cursor:pointer;transition:background .15s,color .15s;}
.sidebar-link:hover{background:#f4f4f5;color:#1c1c1e;}
.sidebar-link.active{background:#1c64f2;color:#fff;}
.sidebar-link .chevron{display:none;margin-left:auto;}
.sidebar-link.active .chevron{display:inline;}
.section-panel{display:none;}
.section-panel.active{display:block;}
.docs-main{flex:1;min-height:calc(100vh - 64px);padding:48px;}
.docs-page{max-width:896px;margin:0 auto;display:flex;flex-direction:column;gap:32px;}
.docs-intro{font-size:1.25rem;color:#71717a;margin:0;}
.screenshot-frame{border:1px solid #e4e4e7;border-radius:10px;overflow:hidden;margin:0;}
.screenshot-frame img{display:block;width:100%;}
.card-grid{display:grid;grid-template-columns:repeat(2,1fr);gap:24px;}
.info-card{padding:24px;border:1px solid #e4e4e7;border-radius:10px;background:#fff;}
.info-card p{color:#71717a;margin:0;}
.info-card ul{color:#71717a;margin:0;padding-left:1.1rem;}
.info-card li{margin-bottom:4px;}
.roles-card{padding:24px;border:1px solid #e4e4e7;border-radius:10px;background:#fff;}
.roles-grid{display:grid;grid-template-columns:repeat(3,1fr);gap:16px;margin-top:16px;}
.role-tile{padding:16px;border-radius:10px;background:#f4f4f5;}
.role-tile p{font-size:14px;color:#71717a;margin:0;}
.topic{display:flex;flex-direction:column;gap:16px;}
.topic p{color:#71717a;margin:0;}
.menu-overlay{position:fixed;inset:0;z-index:30;background:rgba(0,0,0,.5);}
.menu-overlay[hidden]{display:none;}
@media(min-width:768px){
.menu-overlay{display:none;}
}
@media(max-width:767px){
.menu-btn{display:block;}
.header-links{display:none;}
.docs-sidebar{position:fixed;top:64px;left:0;transform:translateX(-100%);transition:transform .2s;}
.docs-sidebar.open{transform:translateX(0);}
.menu-overlay{display:block;position:fixed;inset:0;z-index:30;background:rgba(0,0,0,.5);}
.docs-main{padding:24px;}
.card-grid,.roles-grid{grid-template-columns:1fr;}
}
"#;
