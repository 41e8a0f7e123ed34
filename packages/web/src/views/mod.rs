mod layout;
pub use layout::AppLayout;

mod not_found;
pub use not_found::NotFound;

pub use ui::views::CategoriasView as Categorias;
pub use ui::views::HomeView as Home;
pub use ui::views::RelatoriosView as Relatorios;
pub use ui::views::TransacoesView as Transacoes;
pub use ui::views::UsuariosView as Usuarios;
