fn main() -> anyhow::Result<()> {
    hotel_desk_lib::run()
}
