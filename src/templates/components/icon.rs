use crate::domain::Icon;
use maud::{html, Markup};

enum Shape {
    Path(&'static str),
    Circle(u8, u8, u8),
    Polyline(&'static str),
    Polygon(&'static str),
}

use Shape::{Circle, Path, Polygon, Polyline};

/// Stroke geometry for each icon on a 24x24 grid.
fn shapes(icon: Icon) -> &'static [Shape] {
    match icon {
        Icon::Home => &[
            Path("M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"),
            Polyline("9 22 9 12 15 12 15 22"),
        ],
        Icon::Users => &[
            Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
            Circle(9, 7, 4),
            Path("M22 21v-2a4 4 0 0 0-3-3.87"),
            Path("M16 3.13a4 4 0 0 1 0 7.75"),
        ],
        Icon::Building2 => &[
            Path("M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z"),
            Path("M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2"),
            Path("M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2"),
            Path("M10 6h4M10 10h4M10 14h4M10 18h4"),
        ],
        Icon::TrendingUp => &[
            Polyline("22 7 13.5 15.5 8.5 10.5 2 17"),
            Polyline("16 7 22 7 22 13"),
        ],
        Icon::BarChart3 => &[Path("M3 3v18h18"), Path("M18 17V9M13 17V5M8 17v-3")],
        Icon::PieChart => &[
            Path("M21.21 15.89A10 10 0 1 1 8 2.83"),
            Path("M22 12A10 10 0 0 0 12 2v10z"),
        ],
        Icon::MapPin => &[
            Path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"),
            Circle(12, 10, 3),
        ],
        Icon::Bed => &[Path("M2 4v16M2 8h18a2 2 0 0 1 2 2v10M2 17h20M6 8v9")],
        Icon::Bath => &[
            Path("M9 6 6.5 3.5a1.5 1.5 0 0 0-1-.5C4.683 3 4 3.683 4 4.5V17a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-5"),
            Path("M10 5 8 7M2 12h20M7 19v2M17 19v2"),
        ],
        Icon::Move => &[
            Polyline("5 9 2 12 5 15"),
            Polyline("9 5 12 2 15 5"),
            Polyline("15 19 12 22 9 19"),
            Polyline("19 9 22 12 19 15"),
            Path("M2 12h20M12 2v20"),
        ],
        Icon::ArrowUpRight => &[Path("M7 7h10v10M7 17 17 7")],
        Icon::Star => &[Polygon(
            "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2",
        )],
        Icon::Eye => &[
            Path("M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"),
            Circle(12, 12, 3),
        ],
        Icon::Target => &[Circle(12, 12, 10), Circle(12, 12, 6), Circle(12, 12, 2)],
        Icon::Lightbulb => &[
            Path("M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5"),
            Path("M9 18h6M10 22h4"),
        ],
        Icon::Check => &[Path("M20 6 9 17l-5-5")],
    }
}

pub fn icon(icon: Icon) -> Markup {
    sized_icon(icon, 24)
}

pub fn sized_icon(icon: Icon, size: u16) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width=(size)
            height=(size)
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="icon"
            aria-hidden="true"
        {
            @for shape in shapes(icon) {
                @match shape {
                    Path(d) => path d=(d) {},
                    Circle(cx, cy, r) => circle cx=(cx) cy=(cy) r=(r) {},
                    Polyline(points) => polyline points=(points) {},
                    Polygon(points) => polygon points=(points) {},
                }
            }
        }
    }
}
